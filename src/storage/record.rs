//! Line encoding for user records
//!
//! A record is five comma-separated fields: name, email, income, expenses,
//! savings goal. Fields holding a comma, quote or line break are quoted;
//! every other row is written bare, so plain files stay byte-compatible with
//! the unquoted format.

use csv::{ByteRecord, QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};

use crate::error::{BudgetError, BudgetResult};
use crate::models::User;

/// Number of fields in an encoded record
pub const FIELD_COUNT: usize = 5;

/// Render an amount in a stable decimal form that round-trips exactly
///
/// Whole numbers keep a trailing `.0` (`3000.0`).
pub fn format_amount(value: f64) -> String {
    format!("{:?}", value)
}

/// Encode a user as a single line (no terminator)
pub fn encode_user(user: &User) -> BudgetResult<String> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let income = format_amount(user.income);
    let expenses = format_amount(user.expenses);
    let savings_goal = format_amount(user.savings_goal);
    writer.write_record([
        user.name.as_str(),
        user.email.as_str(),
        income.as_str(),
        expenses.as_str(),
        savings_goal.as_str(),
    ])?;

    let bytes = writer
        .into_inner()
        .map_err(|e| BudgetError::Csv(format!("Failed to finish record: {}", e)))?;
    let mut line = String::from_utf8(bytes)
        .map_err(|e| BudgetError::Csv(format!("Encoded record is not UTF-8: {}", e)))?;

    if line.ends_with('\n') {
        line.pop();
    }
    Ok(line)
}

/// Decode a single line into a user
///
/// `line_number` is only used for error reporting.
pub fn decode_user(line: &str, line_number: usize) -> BudgetResult<User> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());

    let mut record = ByteRecord::new();
    let found = reader.read_byte_record(&mut record).map_err(|e| {
        BudgetError::MalformedRecord {
            line: line_number,
            reason: e.to_string(),
        }
    })?;

    if !found {
        return Err(BudgetError::MalformedRecord {
            line: line_number,
            reason: "empty line".into(),
        });
    }

    decode_record(&record, line_number)
}

/// Decode an already-split record into a user
pub fn decode_record(record: &ByteRecord, line_number: usize) -> BudgetResult<User> {
    let malformed = |reason: String| BudgetError::MalformedRecord {
        line: line_number,
        reason,
    };

    if record.len() != FIELD_COUNT {
        return Err(malformed(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            record.len()
        )));
    }

    let mut fields = Vec::with_capacity(FIELD_COUNT);
    for (index, raw) in record.iter().enumerate() {
        let text = std::str::from_utf8(raw)
            .map_err(|_| malformed(format!("field {} is not valid UTF-8", index + 1)))?;
        fields.push(text);
    }

    let amount = |index: usize, field: &str| -> BudgetResult<f64> {
        let text = fields[index].trim();
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(malformed(format!("{} '{}' is not a number", field, text))),
        }
    };

    Ok(User {
        name: fields[0].to_string(),
        email: fields[1].to_string(),
        income: amount(2, "income")?,
        expenses: amount(3, "expenses")?,
        savings_goal: amount(4, "savings goal")?,
    })
}
