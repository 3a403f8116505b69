use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "mxlpipe")]
#[command(version)]
#[command(about = "Check, encode, and decode MXL score archives", long_about = None)]
#[command(after_help = "Examples:\n  \
  mxlpipe score.mxl              check archive integrity\n  \
  mxlpipe -e score.mxl           print the canonical hex form for a storage write\n  \
  mxlpipe -d dump.txt -o out.mxl decode stored text (hex or base64) back to binary")]
pub struct Cli {
    /// Archive file, or with -d a stored-text dump
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Print the canonical hex encoding instead of checking
    #[arg(short = 'e')]
    pub encode: bool,

    /// Treat FILE as stored text and decode it to raw bytes
    #[arg(short = 'd')]
    pub decode: bool,

    /// Output path for decoded bytes (default: stdout)
    #[arg(short = 'o', value_name = "OUT")]
    pub output: Option<String>,

    /// Suppress the integrity report
    #[arg(short = 'q')]
    pub quiet: bool,
}
