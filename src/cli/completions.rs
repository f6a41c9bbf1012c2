use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    catalog-guard completions bash > ~/.bash_completion.d/catalog-guard\n\n\
                  Generate zsh completions:\n    catalog-guard completions zsh > ~/.zfunc/_catalog-guard\n\n\
                  Generate fish completions:\n    catalog-guard completions fish > ~/.config/fish/completions/catalog-guard.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
