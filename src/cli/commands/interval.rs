use crate::chart::interval::{parse_interval, reference};
use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Interval { seconds } = cmd {
        let t = parse_interval(*seconds)
            .ok_or_else(|| AppError::Other(format!("{seconds}s is out of range")))?;

        let days = (t.date() - reference().date()).num_days();
        if days == 0 {
            println!("{}", t.format("%H:%M:%S"));
        } else {
            println!("{} ({:+} day{})", t.format("%H:%M:%S"), days, if days.abs() == 1 { "" } else { "s" });
        }
    }
    Ok(())
}
