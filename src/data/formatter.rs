use super::record::Record;

/// Format options for plain-text record output
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Prefix rendered before prices
    pub currency_symbol: String,
    /// Truncate descriptions longer than this many characters
    pub max_description: Option<usize>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            currency_symbol: "€".to_string(),
            max_description: Some(60),
        }
    }
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_currency(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    pub fn with_max_description(mut self, max: usize) -> Self {
        self.max_description = Some(max);
        self
    }

    pub fn unlimited() -> Self {
        Self {
            max_description: None,
            ..Self::default()
        }
    }
}

/// Format records as an aligned ITEM / DESCRIPTION / PRICE table
pub fn format_table(records: &[Record], options: &FormatOptions) -> String {
    let descriptions: Vec<String> = records
        .iter()
        .map(|r| truncate(&r.description, options.max_description))
        .collect();
    let prices: Vec<String> = records
        .iter()
        .map(|r| r.display_price(&options.currency_symbol))
        .collect();

    let name_width = column_width("ITEM", records.iter().map(|r| r.name.as_str()));
    let desc_width = column_width("DESCRIPTION", descriptions.iter().map(String::as_str));
    let price_width = column_width("PRICE", prices.iter().map(String::as_str));

    let mut output = String::new();
    output.push_str(&format!(
        "{:<nw$}  {:<dw$}  {:>pw$}\n",
        "ITEM",
        "DESCRIPTION",
        "PRICE",
        nw = name_width,
        dw = desc_width,
        pw = price_width
    ));
    output.push_str(&format!(
        "{:-<nw$}  {:-<dw$}  {:->pw$}\n",
        "",
        "",
        "",
        nw = name_width,
        dw = desc_width,
        pw = price_width
    ));

    for ((record, description), price) in records.iter().zip(&descriptions).zip(&prices) {
        let line = format!(
            "{:<nw$}  {:<dw$}  {:>pw$}",
            record.name,
            description,
            price,
            nw = name_width,
            dw = desc_width,
            pw = price_width
        );
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}

/// Format records as JSON
pub fn format_json(records: &[Record], pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(records)
    } else {
        serde_json::to_string(records)
    }
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0)
}

fn truncate(text: &str, max: Option<usize>) -> String {
    match max {
        Some(max) if max > 1 && text.chars().count() > max => {
            let head: String = text.chars().take(max - 1).collect();
            format!("{}…", head)
        }
        _ => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Record> {
        vec![
            Record::new("Small Wooden Chair", "Dolor sit amet.", "12.50"),
            Record::new("Sleek Steel Car", "Quia nemo ut enim ad.", "999.99"),
        ]
    }

    #[test]
    fn test_format_table_basic() {
        let output = format_table(&sample(), &FormatOptions::default());

        assert!(output.contains("ITEM"));
        assert!(output.contains("DESCRIPTION"));
        assert!(output.contains("PRICE"));
        assert!(output.contains("Small Wooden Chair"));
        assert!(output.contains("€ 999.99"));
        assert_eq!(output.lines().count(), 4);
    }

    #[test]
    fn test_format_table_aligns_prices() {
        let output = format_table(&sample(), &FormatOptions::default());
        let lines: Vec<&str> = output.lines().skip(2).collect();

        let ends: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
        assert_eq!(ends[0], ends[1]);
    }

    #[test]
    fn test_format_table_truncates_description() {
        let records = vec![Record::new("Hat", "Abcdefghijklmnop.", "1.00")];
        let options = FormatOptions::new().with_max_description(5);
        let output = format_table(&records, &options);

        assert!(output.contains("Abcd…"));
        assert!(!output.contains("Abcdefghijklmnop."));
    }

    #[test]
    fn test_format_table_custom_currency() {
        let options = FormatOptions::unlimited().with_currency("$");
        let output = format_table(&sample(), &options);
        assert!(output.contains("$ 12.50"));
        assert!(!output.contains('€'));
    }

    #[test]
    fn test_format_json() {
        let json = format_json(&sample(), false).unwrap();
        let parsed: Vec<Record> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_format_empty() {
        let output = format_table(&[], &FormatOptions::default());
        assert_eq!(output.lines().count(), 2);
        assert_eq!(format_json(&[], false).unwrap(), "[]");
    }
}
