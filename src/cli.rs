use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "sb2unity-rs",
    about = "Scratch .sb3 to Unity project scaffold converter (C# script skeletons plus asset layout)."
)]
pub struct Args {
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    #[arg(
        long,
        value_name = "PATH",
        help = "Also write the concatenated C# script report to this path."
    )]
    pub emit_script: Option<PathBuf>,

    #[arg(long, help = "List every block opcode that has no translation rule.")]
    pub list_unhandled: bool,
}
