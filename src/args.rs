use crate::scan::DEFAULT_CONTEXT;
use clap::Parser;
use std::path::PathBuf;

pub const LOGSCAN_LOG_ENV: &str = "LOGSCAN_LOG";
pub const DEFAULT_LOG_PATH: &str = "gh-logs/run-17799343414.log";

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Build log to scan.
    #[clap(env = LOGSCAN_LOG_ENV, default_value = DEFAULT_LOG_PATH)]
    pub path: PathBuf,
    /// Number of lines shown before and after each match.
    #[clap(short = 'C', long, default_value_t = DEFAULT_CONTEXT)]
    pub context: u64,
    /// Print debug diagnostics to stderr.
    /// RUST_LOG takes precedence when set.
    #[clap(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use lazy_static::lazy_static;
    use test_case::test_case;

    lazy_static! {
        static ref SERIAL_TEST: std::sync::Mutex<()> = Default::default();
    }

    #[test_case(&["logscan"], None => PathBuf::from(DEFAULT_LOG_PATH); "default path")]
    #[test_case(&["logscan"], Some("from_env.log") => PathBuf::from("from_env.log"); "env path")]
    #[test_case(&["logscan", "cli.log"], Some("from_env.log") => PathBuf::from("cli.log"); "cli beats env")]
    fn log_path_precedence(cli: &[&str], env: Option<&str>) -> PathBuf {
        let _guard = SERIAL_TEST.lock().unwrap();
        std::env::remove_var(LOGSCAN_LOG_ENV);
        if let Some(env) = env {
            std::env::set_var(LOGSCAN_LOG_ENV, env);
        }

        let args = Args::try_parse_from(cli);
        std::env::remove_var(LOGSCAN_LOG_ENV);
        args.unwrap().path
    }

    #[test_case(&["logscan"] => DEFAULT_CONTEXT; "default context")]
    #[test_case(&["logscan", "-C", "5"] => 5; "short flag")]
    #[test_case(&["logscan", "--context", "0"] => 0; "long flag")]
    fn context_lines(cli: &[&str]) -> u64 {
        Args::try_parse_from(cli).unwrap().context
    }

    #[test]
    fn rejects_negative_context() {
        assert!(Args::try_parse_from(["logscan", "-C", "-1"]).is_err());
    }
}
