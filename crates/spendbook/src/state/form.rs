//! State of the always-visible entry form.

use jiff::Zoned;
use jiff::civil::Date;

/// Fields of the entry form, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Item,
    Amount,
    Date,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Item => FormField::Amount,
            FormField::Amount => FormField::Date,
            FormField::Date => FormField::Item,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Item => FormField::Date,
            FormField::Amount => FormField::Item,
            FormField::Date => FormField::Amount,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Item => "Item",
            FormField::Amount => "Amount",
            FormField::Date => "Date",
        }
    }
}

/// Raw input for a new record, as the user typed it.
///
/// The form owns add-input validation; the record store never re-checks
/// what it is handed.
#[derive(Debug)]
pub struct BookingForm {
    pub item: String,
    pub amount: String,
    pub date: String,
    pub focused: FormField,
}

/// A validated submission, ready for the store.
#[derive(Debug)]
pub struct AddInput {
    pub item: String,
    pub amount: i64,
    pub date: Date,
}

impl BookingForm {
    /// An empty form with the date preset to today.
    pub fn new() -> Self {
        Self {
            item: String::new(),
            amount: String::new(),
            date: Zoned::now().date().to_string(),
            focused: FormField::Item,
        }
    }

    fn focused_value_mut(&mut self) -> &mut String {
        match self.focused {
            FormField::Item => &mut self.item,
            FormField::Amount => &mut self.amount,
            FormField::Date => &mut self.date,
        }
    }

    pub fn focused_value(&self) -> &str {
        match self.focused {
            FormField::Item => &self.item,
            FormField::Amount => &self.amount,
            FormField::Date => &self.date,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.focused_value_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.focused_value_mut().pop();
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    /// Validate the raw input: item non-empty after trimming, amount a
    /// whole number, date in `YYYY-MM-DD` form.
    pub fn parse(&self) -> Result<AddInput, String> {
        let item = self.item.trim();
        if item.is_empty() {
            return Err("item cannot be empty".to_string());
        }

        let amount: i64 = self
            .amount
            .trim()
            .parse()
            .map_err(|_| format!("amount is not a whole number: {:?}", self.amount))?;

        let date: Date = self
            .date
            .trim()
            .parse()
            .map_err(|_| format!("date must be YYYY-MM-DD: {:?}", self.date))?;

        Ok(AddInput {
            item: item.to_string(),
            amount,
            date,
        })
    }

    /// Reset after a successful add: item and amount clear, the chosen
    /// date stays for the next entry.
    pub fn reset_after_add(&mut self) {
        self.item.clear();
        self.amount.clear();
        self.focused = FormField::Item;
    }
}

impl Default for BookingForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(item: &str, amount: &str, date: &str) -> BookingForm {
        BookingForm {
            item: item.to_string(),
            amount: amount.to_string(),
            date: date.to_string(),
            focused: FormField::Item,
        }
    }

    #[test]
    fn test_parse_trims_the_item() {
        let input = form("  coffee  ", "80", "2024-05-02").parse().unwrap();
        assert_eq!(input.item, "coffee");
        assert_eq!(input.amount, 80);
    }

    #[test]
    fn test_parse_rejects_blank_item() {
        assert!(form("   ", "80", "2024-05-02").parse().is_err());
    }

    #[test]
    fn test_parse_rejects_non_numeric_amount() {
        assert!(form("coffee", "eighty", "2024-05-02").parse().is_err());
    }

    #[test]
    fn test_parse_accepts_negative_amounts() {
        let input = form("refund", "-120", "2024-05-02").parse().unwrap();
        assert_eq!(input.amount, -120);
    }

    #[test]
    fn test_parse_rejects_malformed_dates() {
        assert!(form("coffee", "80", "yesterday").parse().is_err());
        assert!(form("coffee", "80", "2024-13-40").parse().is_err());
    }

    #[test]
    fn test_reset_keeps_the_date() {
        let mut f = form("coffee", "80", "2024-05-02");
        f.focused = FormField::Date;
        f.reset_after_add();

        assert!(f.item.is_empty());
        assert!(f.amount.is_empty());
        assert_eq!(f.date, "2024-05-02");
        assert_eq!(f.focused, FormField::Item);
    }

    #[test]
    fn test_new_form_defaults_to_today() {
        let f = BookingForm::new();
        assert!(f.parse().is_err(), "empty item must not validate");
        assert!(f.date.parse::<jiff::civil::Date>().is_ok());
    }
}
