//! Built-in coercions used by the predefined schema table.

use chrono::{Local, NaiveDate, NaiveTime, TimeZone};

use crate::settings::{Value, defaults};

use super::{CoercionError, Context, Terminate};

fn expect_text(value: Value) -> Result<String, CoercionError> {
    match value {
        Value::Text(s) => Ok(s),
        other => Err(CoercionError::Expected {
            expected: "text",
            found: other.kind(),
        }),
    }
}

/// Decodes an integer token.
///
/// # Errors
///
/// Returns [`CoercionError::InvalidInteger`] if `raw` is not a base-10 `i64`.
pub fn parse_integer(raw: &str) -> Result<Value, CoercionError> {
    raw.trim()
        .parse::<i64>()
        .map(Value::Int)
        .map_err(|source| CoercionError::InvalidInteger {
            value: raw.to_string(),
            source,
        })
}

/// Accepts `E` as is, any other code only if the language source lists it.
///
/// # Errors
///
/// Returns [`CoercionError::UnknownLanguage`] for unlisted codes and
/// [`CoercionError::Network`] if the list cannot be fetched.
pub fn verify_language(value: Value, ctx: &Context<'_>) -> Result<Value, CoercionError> {
    let code = expect_text(value)?;
    if code == defaults::LANG {
        return Ok(Value::Text(code));
    }

    let languages = ctx.languages().fetch()?;
    if languages.iter().any(|l| l.code == code) {
        Ok(Value::Text(code))
    } else {
        Err(CoercionError::UnknownLanguage { code })
    }
}

/// Writes the language list to the context output and ends the parse.
///
/// # Errors
///
/// Returns [`CoercionError::Network`] if the list cannot be fetched and
/// [`CoercionError::Output`] if writing fails.
pub fn print_languages(ctx: &mut Context<'_>) -> Result<Terminate, CoercionError> {
    let languages = ctx.languages().fetch()?;
    let out = ctx.output();

    writeln!(out, "language codes:").map_err(CoercionError::Output)?;
    for language in &languages {
        writeln!(out, "{:>3}  {}", language.code, language.name).map_err(CoercionError::Output)?;
    }
    out.flush().map_err(CoercionError::Output)?;

    Ok(Terminate::SUCCESS)
}

/// Converts mebibytes to bytes.
///
/// # Errors
///
/// Rejects negative sizes and sizes whose byte count overflows.
pub fn mib_to_bytes(value: Value, _ctx: &Context<'_>) -> Result<Value, CoercionError> {
    let Value::Int(mib) = value else {
        return Err(CoercionError::Expected {
            expected: "integer",
            found: value.kind(),
        });
    };
    if mib < 0 {
        return Err(CoercionError::NegativeSize { value: mib });
    }
    mib.checked_mul(defaults::MIB)
        .map(Value::Int)
        .ok_or(CoercionError::SizeOverflow { value: mib })
}

/// Splits comma separated text into an ordered list.
///
/// Items are kept verbatim, empty ones included.
///
/// # Errors
///
/// Returns [`CoercionError::Expected`] for non-text input.
pub fn split_list(value: Value, _ctx: &Context<'_>) -> Result<Value, CoercionError> {
    let text = expect_text(value)?;
    Ok(Value::list(text.split(',')))
}

/// Converts `YYYY-MM-DD` to the epoch timestamp of local midnight.
///
/// # Errors
///
/// Returns [`CoercionError::InvalidDate`] for malformed dates.
pub fn date_to_timestamp(value: Value, _ctx: &Context<'_>) -> Result<Value, CoercionError> {
    let text = expect_text(value)?;
    let date = NaiveDate::parse_from_str(&text, "%Y-%m-%d").map_err(|source| {
        CoercionError::InvalidDate {
            value: text.clone(),
            source,
        }
    })?;

    let midnight = date.and_time(NaiveTime::MIN);
    let local = Local
        .from_local_datetime(&midnight)
        .earliest()
        .ok_or(CoercionError::NonexistentLocalTime { value: text })?;

    Ok(Value::Int(local.timestamp()))
}
