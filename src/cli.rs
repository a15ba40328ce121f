use clap::{Arg, ArgAction, Command};

pub fn cli() -> Command {
    Command::new("gitgrab")
        .about("Clone one of your GitHub repositories by keyword")
        .arg_required_else_help(true)
        .arg(
            Arg::new("keyword")
                .value_name("KEYWORD")
                .help("Keyword to match against your repository names")
                .required_unless_present_any(["reconfigure", "completions"]),
        )
        .arg(
            Arg::new("reconfigure")
                .long("reconfigure")
                .action(ArgAction::SetTrue)
                .conflicts_with("keyword")
                .help("Prompt for the GitHub account and token again"),
        )
        .arg(
            Arg::new("completions")
                .long("completions")
                .value_name("SHELL")
                .value_parser(["bash", "zsh"])
                .conflicts_with_all(["keyword", "reconfigure"])
                .help("Print a completion script with common keyword hints"),
        )
}
