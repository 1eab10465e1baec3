use crate::commands::{CommandResult, OutputLine, Style};
use crate::fs::SYSTEM_LOGS;
use crate::runtime::RandomSource;

/// Draws above this show the system log block.
const LOG_THRESHOLD: f64 = 0.4;
const LOG_ENTRIES: usize = 3;

/// Fallback for any verb outside the known set.
pub fn handle_unknown(verb: &str, random: &mut dyn RandomSource) -> CommandResult {
    let mut result = CommandResult::line(format!("bash: {}: command not found", verb));

    if random.unit() > LOG_THRESHOLD {
        result.push_plain("");
        result.push(OutputLine::styled("[system logs]", Style::Muted));
        for entry in SYSTEM_LOGS.iter().take(LOG_ENTRIES) {
            result.push(OutputLine::styled(*entry, Style::for_log(entry)));
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FixedRandom;

    #[test]
    fn test_unknown_without_logs() {
        let result = handle_unknown("foo", &mut FixedRandom::new(0.4));
        assert_eq!(result.text(), "bash: foo: command not found\n");
    }

    #[test]
    fn test_unknown_with_logs() {
        let result = handle_unknown("foo", &mut FixedRandom::new(0.41));
        let lines: Vec<(&str, Style)> = result.lines.iter().map(|l| (l.text.as_str(), l.style)).collect();
        assert_eq!(
            lines,
            vec![
                ("bash: foo: command not found", Style::Plain),
                ("", Style::Plain),
                ("[system logs]", Style::Muted),
                ("[SYS] Initializing pseudo-random subsystems...", Style::Muted),
                ("[OK] Mounting /home/kaustubh", Style::Success),
                ("[OK] Loading thought modules...", Style::Success),
            ]
        );
    }
}
