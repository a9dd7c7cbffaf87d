use clap::Parser;

use crate::convert::ErrorPolicy;

#[derive(Parser)]
#[command(name = "js2txt")]
#[command(version = "0.1.0")]
#[command(about = "Copy every pages/*.js file into converted_pages/*.txt")]
pub struct Cli {
    /// Skip files that fail to read or write instead of aborting the run
    #[arg(short, long, default_value_t = false)]
    pub keep_going: bool,
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    pub fn policy(&self) -> ErrorPolicy {
        if self.keep_going {
            ErrorPolicy::SkipAndContinue
        } else {
            ErrorPolicy::FailFast
        }
    }
}
