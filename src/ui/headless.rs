use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::game::GameSession;

/// Line-oriented driver: one column number per input line, one JSON outcome
/// per output line, then the final board as text.
pub fn run_headless<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: R,
    mut output: W,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        // Wider than isize so that huge numbers still reach the engine and
        // come back as an invalid column.
        let json = match trimmed.parse::<i128>() {
            Ok(column) => {
                let column = isize::try_from(column)
                    .unwrap_or(if column < 0 { isize::MIN } else { isize::MAX });
                serde_json::to_string(&session.play_move(column))?
            }
            Err(err) => {
                warn!(input = trimmed, %err, "ignoring line that is not a column number");
                serde_json::json!({ "kind": "unparsed", "input": trimmed }).to_string()
            }
        };
        writeln!(output, "{json}")?;
    }

    writeln!(output)?;
    write!(output, "{}", session.board())?;
    output.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> (GameSession, Vec<String>) {
        let mut session = GameSession::new();
        let mut out = Vec::new();
        run_headless(&mut session, input.as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        (session, text.lines().map(str::to_string).collect())
    }

    #[test]
    fn test_outcome_per_line() {
        let (session, lines) = run("3\n3\n\nfoo\n-1\n");
        assert_eq!(session.moves_played(), 2);
        assert!(lines[0].contains(r#""kind":"placed""#));
        assert!(lines[1].contains(r#""row":4"#));
        assert_eq!(lines[2], r#"{"input":"foo","kind":"unparsed"}"#);
        assert!(lines[3].contains(r#""error":"invalid_column""#));
        assert_eq!(lines[4], "");
        assert_eq!(lines[9], "...O...");
        assert_eq!(lines[10], "...X...");
    }

    #[test]
    fn test_oversized_number_is_invalid_column() {
        let (session, lines) = run("99999999999999999999999\n-99999999999999999999999\n");
        assert_eq!(session.moves_played(), 0);
        for (line, column) in lines.iter().zip([isize::MAX, isize::MIN]) {
            assert!(line.contains(r#""kind":"rejected""#));
            assert!(line.contains(r#""error":"invalid_column""#));
            assert!(line.contains(&format!(r#""column":{column}"#)));
        }
    }

    #[test]
    fn test_scripted_win() {
        let (session, lines) = run("3 \n3\n4\n4\n5\n5\n6\n0\n");
        assert!(session.is_over());
        assert!(lines[6].starts_with(r#"{"kind":"win","player":1"#));
        assert!(lines[7].contains(r#""error":"game_over""#));
    }
}
