use super::*;

#[test]
fn parses_answers() {
    assert_eq!(parse_command("ai").unwrap(), Command::Answer(Verdict::Ai));
    assert_eq!(parse_command(" AI \n").unwrap(), Command::Answer(Verdict::Ai));
    assert_eq!(parse_command("1").unwrap(), Command::Answer(Verdict::Ai));
    assert_eq!(parse_command("Not AI").unwrap(), Command::Answer(Verdict::NotAi));
    assert_eq!(parse_command("not-ai").unwrap(), Command::Answer(Verdict::NotAi));
    assert_eq!(parse_command("0").unwrap(), Command::Answer(Verdict::NotAi));
}

#[test]
fn strips_accents_and_punctuation() {
    assert_eq!(parse_command("Nöt ÄI!").unwrap(), Command::Answer(Verdict::NotAi));
    assert_eq!(parse_command("Play again?").unwrap(), Command::Restart);
}

#[test]
fn blank_line_means_next() {
    assert_eq!(parse_command("").unwrap(), Command::Next);
    assert_eq!(parse_command("   ").unwrap(), Command::Next);
    assert_eq!(parse_command("next").unwrap(), Command::Next);
}

#[test]
fn parses_other_commands() {
    assert_eq!(parse_command("restart").unwrap(), Command::Restart);
    assert_eq!(parse_command("help").unwrap(), Command::Help);
    assert_eq!(parse_command("quit").unwrap(), Command::Quit);
}

#[test]
fn rejects_unknown_commands() {
    assert!(parse_command("maybe").is_err());
    assert!(parse_command("2").is_err());
}
