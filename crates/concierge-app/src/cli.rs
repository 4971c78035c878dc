use clap::Parser;

/// Concierge: a terminal chat box for a booking assistant endpoint.
#[derive(Parser, Debug)]
#[command(name = "concierge", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Chat endpoint URL override.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Log filter override (e.g. `concierge=debug`).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let args = Args::try_parse_from([
            "concierge",
            "--endpoint",
            "http://localhost:9000/chat/",
            "--log-level",
            "concierge=debug",
        ])
        .unwrap();
        assert_eq!(args.endpoint.as_deref(), Some("http://localhost:9000/chat/"));
        assert_eq!(args.log_level.as_deref(), Some("concierge=debug"));
        assert_eq!(args.config, None);
    }
}
