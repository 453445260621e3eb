use std::io::{self, Write};

use clap::{Args, CommandFactory};
use eyre::Result;

use super::Cli;

#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    shell: clap_complete::Shell,
}

impl CompletionsCommand {
    pub fn run(&self) -> Result<()> {
        self.write_to(&mut io::stdout().lock());
        Ok(())
    }

    fn write_to(&self, out: &mut dyn Write) {
        let mut cmd = Cli::command();
        let bin_name = cmd.get_name().to_string();
        clap_complete::generate(self.shell, &mut cmd, bin_name, out);
    }
}

#[cfg(test)]
mod tests {
    use clap_complete::Shell;

    use super::*;

    #[test]
    fn test_bash_completions_list_subcommands() {
        let mut buf = Vec::new();
        CompletionsCommand { shell: Shell::Bash }.write_to(&mut buf);

        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("cradle"));
        assert!(script.contains("generate"));
        assert!(script.contains("check"));
    }
}
