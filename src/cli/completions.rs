use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    aptpack completions bash > ~/.bash_completion.d/aptpack\n\n\
                  Generate zsh completions:\n    aptpack completions zsh > ~/.zfunc/_aptpack\n\n\
                  Generate fish completions:\n    aptpack completions fish > ~/.config/fish/completions/aptpack.fish\n\n\
                  Generate PowerShell completions:\n    aptpack completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
