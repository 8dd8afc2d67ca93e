use nom::{character::complete::one_of, IResult};

use crate::error::GrammarError;
use crate::model::{Call, Strain};

/// Parse a contract-bid level digit (1-7).
fn level(input: &str) -> IResult<&str, u8> {
    let (input, digit) = one_of("1234567")(input)?;
    Ok((input, digit as u8 - b'0'))
}

/// Parse a strain code: C, D, H, S, N, or NT.
fn strain(input: &str) -> IResult<&str, Strain> {
    let (input, letter) = one_of("CDHSN")(input)?;
    let strain = match letter {
        'C' => Strain::Clubs,
        'D' => Strain::Diamonds,
        'H' => Strain::Hearts,
        'S' => Strain::Spades,
        _ => {
            // "N" and "NT" both mean no-trump
            let input = input.strip_prefix('T').unwrap_or(input);
            return Ok((input, Strain::NoTrump));
        }
    };
    Ok((input, strain))
}

/// Parse a contract bid like "1C" or "3NT" (input already case-folded).
fn contract_bid(input: &str) -> IResult<&str, Call> {
    let (input, level) = level(input)?;
    let (input, strain) = strain(input)?;
    Ok((input, Call::Bid { level, strain }))
}

/// Map any accepted spelling of a call to its canonical form.
///
/// Accepted spellings after trimming and case-folding: "pass"/"p",
/// "double"/"dbl"/"x", "redouble"/"rdbl"/"xx", and contract bids of
/// one digit 1-7 followed by exactly one strain code. Anything else,
/// including empty input and trailing garbage, is rejected.
pub fn canonicalize(token: &str) -> Result<Call, GrammarError> {
    let folded = token.trim().to_uppercase();
    match folded.as_str() {
        "" => Err(GrammarError::Empty),
        "PASS" | "P" => Ok(Call::Pass),
        "DOUBLE" | "DBL" | "X" => Ok(Call::Double),
        "REDOUBLE" | "RDBL" | "XX" => Ok(Call::Redouble),
        other => match contract_bid(other) {
            Ok(("", call)) => Ok(call),
            _ => Err(GrammarError::InvalidCall(token.trim().to_string())),
        },
    }
}

/// Whether a raw token denotes a syntactically legal call.
pub fn is_well_formed(token: &str) -> bool {
    canonicalize(token).is_ok()
}
