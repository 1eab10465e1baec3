use std::time::Duration;

use crate::commands::{CommandResult, OutputSink};
use crate::runtime::{Clock, RandomSource};

pub const PASSWORD_PROMPT: &str = "[sudo] password for guest: ********";

pub const RESPONSES: &[&str] = &[
    "Access granted. You now have root privileges.\nJust kidding. This is a static portfolio.",
    "Segmentation fault (core dumped)",
    "Warning: sudoers file corrupted, entering recovery mode...",
    "Permission denied. This incident will be reported. (Not really)",
];

/// Pretend to authenticate. The prompt goes to `sink` before the clock is
/// awaited for `delay`, then one response is drawn. Arguments are never
/// looked at. The returned result holds the prompt too.
pub async fn handle_sudo(
    clock: &dyn Clock,
    random: &mut dyn RandomSource,
    delay: Duration,
    sink: &mut dyn OutputSink,
) -> CommandResult {
    let mut result = CommandResult::line(PASSWORD_PROMPT);
    sink.emit(&result.lines[0]);
    clock.sleep(delay).await;
    let response = RESPONSES[random.index(RESPONSES.len())];
    for line in response.split('\n') {
        result.push_plain(line);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{Discard, OutputLine};
    use crate::runtime::RngSource;
    use crate::testing::{FixedRandom, RecordingClock};

    const DELAY: Duration = Duration::from_millis(1000);

    fn response_of(result: &CommandResult) -> String {
        result.lines[1..].iter().map(|l| l.text.as_str()).collect::<Vec<_>>().join("\n")
    }

    /// Notes how many pauses had happened when each line was emitted.
    struct PauseCounter<'a> {
        clock: &'a RecordingClock,
        emitted: Vec<(String, usize)>,
    }

    impl OutputSink for PauseCounter<'_> {
        fn emit(&mut self, line: &OutputLine) {
            self.emitted.push((line.text.clone(), self.clock.sleeps().len()));
        }
    }

    #[tokio::test]
    async fn test_sudo_waits_then_responds() {
        let clock = RecordingClock::new();
        let mut random = FixedRandom::new(0.3);
        let result = handle_sudo(&clock, &mut random, DELAY, &mut Discard).await;

        assert_eq!(clock.sleeps(), vec![DELAY]);
        assert_eq!(result.lines[0].text, PASSWORD_PROMPT);
        assert_eq!(response_of(&result), RESPONSES[1]);
    }

    #[tokio::test]
    async fn test_sudo_multiline_response() {
        let clock = RecordingClock::new();
        let mut random = FixedRandom::new(0.0);
        let result = handle_sudo(&clock, &mut random, DELAY, &mut Discard).await;
        assert_eq!(result.lines.len(), 3);
        assert_eq!(result.lines[2].text, "Just kidding. This is a static portfolio.");
    }

    #[tokio::test]
    async fn test_sudo_prompt_emitted_before_pause() {
        let clock = RecordingClock::new();
        let mut random = FixedRandom::new(0.3);
        let mut sink = PauseCounter { clock: &clock, emitted: Vec::new() };
        handle_sudo(&clock, &mut random, DELAY, &mut sink).await;

        assert_eq!(sink.emitted, vec![(PASSWORD_PROMPT.to_string(), 0)]);
        assert_eq!(clock.sleeps().len(), 1);
    }

    #[tokio::test]
    async fn test_sudo_response_distribution_is_uniform() {
        let clock = RecordingClock::new();
        let mut random = RngSource::seeded(0x5eed);
        let trials = 8000;
        let mut counts = [0usize; 4];

        for _ in 0..trials {
            let result = handle_sudo(&clock, &mut random, DELAY, &mut Discard).await;
            let response = response_of(&result);
            let idx = RESPONSES.iter().position(|r| *r == response).expect("unknown response");
            counts[idx] += 1;
        }

        // Expected 2000 each; 5 sigma is roughly 194.
        for count in counts {
            assert!((1800..=2200).contains(&count), "counts {:?}", counts);
        }
        assert_eq!(clock.sleeps().len(), trials);
    }
}
