use crate::domain::types::CoinRecord;
use crate::strings::messages;

pub struct CoinFormatter;

impl CoinFormatter {
    /// Renders a record as the plain-text answer. Every line, the last included, ends in `\n`.
    pub fn format(record: &CoinRecord) -> String {
        let mut lines = vec![messages::coin_header(&record.name, &record.symbol)];

        if record.socials.is_empty() {
            lines.push(messages::NO_SOCIALS.to_string());
        } else {
            lines.push(messages::SOCIALS_HEADER.to_string());
            for (label, value) in &record.socials {
                lines.push(format!("  {label}: {value}"));
            }
        }

        if record.team.is_empty() {
            lines.push(messages::NO_TEAM.to_string());
        } else {
            lines.push(messages::TEAM_HEADER.to_string());
            for member in &record.team {
                lines.push(format!("  {} - {}", member.name, member.position));
            }
        }

        lines.into_iter().fold(String::new(), |mut out, line| {
            out.push_str(&line);
            out.push('\n');
            out
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::TeamMember;

    #[test]
    fn test_format_bare_record() {
        let record = CoinRecord {
            name: "Bitcoin".into(),
            symbol: "BTC".into(),
            socials: vec![],
            team: vec![],
        };
        assert_eq!(
            CoinFormatter::format(&record),
            "Coin: Bitcoin (BTC)\nNo social links available.\nNo team information available on Coingecko API\n"
        );
    }

    #[test]
    fn test_format_full_record() {
        let record = CoinRecord {
            name: "Bitcoin".into(),
            symbol: "BTC".into(),
            socials: vec![
                ("Homepage".into(), "https://bitcoin.org".into()),
                ("Twitter Screen Name".into(), "bitcoin".into()),
            ],
            team: vec![
                TeamMember {
                    name: "Alice".into(),
                    position: "CEO".into(),
                },
                TeamMember {
                    name: "Bob".into(),
                    position: "CTO".into(),
                },
            ],
        };
        let expected = concat!(
            "Coin: Bitcoin (BTC)\n",
            "Socials:\n",
            "  Homepage: https://bitcoin.org\n",
            "  Twitter Screen Name: bitcoin\n",
            "Executives/Team:\n",
            "  Alice - CEO\n",
            "  Bob - CTO\n"
        );
        assert_eq!(CoinFormatter::format(&record), expected);
    }

    #[test]
    fn test_format_ends_every_line_with_newline() {
        let record = CoinRecord {
            name: "Bitcoin".into(),
            symbol: "BTC".into(),
            socials: vec![],
            team: vec![],
        };
        let out = CoinFormatter::format(&record);
        assert!(out.ends_with("Coingecko API\n"));
        assert!(!out.ends_with("\n\n"));
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn test_format_empty_symbol() {
        let record = CoinRecord {
            name: "Mystery".into(),
            symbol: String::new(),
            socials: vec![],
            team: vec![],
        };
        assert!(CoinFormatter::format(&record).starts_with("Coin: Mystery ()\n"));
    }
}
