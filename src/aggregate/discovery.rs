//! Discovery of per-domain declaration files
//!
//! Expected layout under the repository root:
//!
//! ```text
//! domains/<domain>/<env>/kafka-request.yaml
//! domains/<domain>/<env>/schemas/<subject>.avsc
//! ```

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::domain::Environment;
use crate::error::{Result, config::domains_dir_not_found};

/// Directory holding one sub-directory per domain
pub const DOMAINS_DIR: &str = "domains";

/// Per-domain, per-environment declaration filename
pub const DECLARATION_FILE: &str = "kafka-request.yaml";

/// Per-domain, per-environment directory of schema documents
pub const SCHEMAS_DIR: &str = "schemas";

/// Extension of schema documents
pub const SCHEMA_EXTENSION: &str = "avsc";

/// A declaration file belonging to one domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationFile {
    pub domain: String,
    pub path: PathBuf,
}

/// A schema document; its subject is the file stem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDocument {
    pub domain: String,
    pub subject: String,
    pub path: PathBuf,
}

/// The `domains/` tree of a repository
#[derive(Debug, Clone)]
pub struct DomainLayout {
    root: PathBuf,
    domains_dir: PathBuf,
}

impl DomainLayout {
    /// Open the layout rooted at `root`; `root/domains` must exist
    pub fn open(root: &Path) -> Result<Self> {
        let domains_dir = root.join(DOMAINS_DIR);
        if !domains_dir.is_dir() {
            return Err(domains_dir_not_found(root.display().to_string()));
        }
        Ok(Self {
            root: root.to_path_buf(),
            domains_dir,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Domain directory names, sorted; hidden directories are skipped
    pub fn domain_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in WalkDir::new(&self.domains_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;
            if !entry.file_type().is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            if name.starts_with('.') {
                continue;
            }
            names.push(name);
        }
        Ok(names)
    }

    /// `domains/<domain>/<env>/`
    pub fn env_dir(&self, domain: &str, environment: &Environment) -> PathBuf {
        self.domains_dir.join(domain).join(environment.as_str())
    }

    /// Declaration files present for an environment, in domain order
    pub fn declarations(&self, environment: &Environment) -> Result<Vec<DeclarationFile>> {
        Ok(self
            .domain_names()?
            .into_iter()
            .filter_map(|domain| {
                let path = self.env_dir(&domain, environment).join(DECLARATION_FILE);
                path.is_file().then_some(DeclarationFile { domain, path })
            })
            .collect())
    }

    /// Schema documents present for an environment, in domain then file order
    pub fn schema_documents(&self, environment: &Environment) -> Result<Vec<SchemaDocument>> {
        let mut documents = Vec::new();
        for domain in self.domain_names()? {
            let schemas_dir = self.env_dir(&domain, environment).join(SCHEMAS_DIR);
            if !schemas_dir.is_dir() {
                continue;
            }
            for entry in WalkDir::new(&schemas_dir)
                .min_depth(1)
                .max_depth(1)
                .sort_by_file_name()
            {
                let entry = entry?;
                let path = entry.path();
                if !entry.file_type().is_file()
                    || path.extension().and_then(|e| e.to_str()) != Some(SCHEMA_EXTENSION)
                {
                    continue;
                }
                let Some(subject) = path.file_stem().map(|s| s.to_string_lossy().to_string())
                else {
                    continue;
                };
                documents.push(SchemaDocument {
                    domain: domain.clone(),
                    subject,
                    path: path.to_path_buf(),
                });
            }
        }
        Ok(documents)
    }

    /// Path relative to the repository root, with `/` separators
    pub fn relative(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }
}
