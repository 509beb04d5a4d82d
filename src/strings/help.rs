//! # Help Text
//!
//! Shown by `--help` below the argument list.

pub const MAIN: &str = concat!(
    "Messages:\n",
    "  hello               Greeting\n",
    "  executives <coin>   Socials and team of a coin (CoinGecko id, e.g. bitcoin)\n",
    "\n",
    "Bare arguments are treated as a coin id: `near-coin-agent bitcoin`.\n",
    "Without arguments the agent asks for one line on stdin.\n",
    "\n",
    "Config: $NEAR_COIN_AGENT_CONFIG, ./data/config.yaml or <config dir>/near-coin-agent/config.yaml\n"
);
