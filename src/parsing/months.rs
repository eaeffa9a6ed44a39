//! Month-name lookup for roster labels and file names.
//!
//! Rosters name months in Greek, either in the nominative ("Μάρτιος") or the
//! genitive ("Μαρτίου") form, with or without accents and in any case.

/// Month names as `(nominative, genitive, month number)`, accent-free upper case.
const MONTH_NAMES: [(&str, &str, u32); 12] = [
    ("ΙΑΝΟΥΑΡΙΟΣ", "ΙΑΝΟΥΑΡΙΟΥ", 1),
    ("ΦΕΒΡΟΥΑΡΙΟΣ", "ΦΕΒΡΟΥΑΡΙΟΥ", 2),
    ("ΜΑΡΤΙΟΣ", "ΜΑΡΤΙΟΥ", 3),
    ("ΑΠΡΙΛΙΟΣ", "ΑΠΡΙΛΙΟΥ", 4),
    ("ΜΑΙΟΣ", "ΜΑΙΟΥ", 5),
    ("ΙΟΥΝΙΟΣ", "ΙΟΥΝΙΟΥ", 6),
    ("ΙΟΥΛΙΟΣ", "ΙΟΥΛΙΟΥ", 7),
    ("ΑΥΓΟΥΣΤΟΣ", "ΑΥΓΟΥΣΤΟΥ", 8),
    ("ΣΕΠΤΕΜΒΡΙΟΣ", "ΣΕΠΤΕΜΒΡΙΟΥ", 9),
    ("ΟΚΤΩΒΡΙΟΣ", "ΟΚΤΩΒΡΙΟΥ", 10),
    ("ΝΟΕΜΒΡΙΟΣ", "ΝΟΕΜΒΡΙΟΥ", 11),
    ("ΔΕΚΕΜΒΡΙΟΣ", "ΔΕΚΕΜΒΡΙΟΥ", 12),
];

/// Upper-cases `text` and strips Greek tonos/dialytika.
fn normalize(text: &str) -> String {
    text.to_uppercase()
        .chars()
        .filter(|c| !('\u{0300}'..='\u{036F}').contains(c))
        .map(|c| match c {
            'Ά' => 'Α',
            'Έ' => 'Ε',
            'Ή' => 'Η',
            'Ί' | 'Ϊ' => 'Ι',
            'Ό' => 'Ο',
            'Ύ' | 'Ϋ' => 'Υ',
            'Ώ' => 'Ω',
            other => other,
        })
        .collect()
}

/// Finds the first month named anywhere in `text`.
///
/// # Example
///
/// ```
/// use shift_calendar::parsing::month_from_text;
///
/// assert_eq!(month_from_text("Μάρτιος"), Some(3));
/// assert_eq!(month_from_text("ΜΑΪΟΥ 2025"), Some(5));
/// assert_eq!(month_from_text("Δευτέρα"), None);
/// ```
pub fn month_from_text(text: &str) -> Option<u32> {
    let normalized = normalize(text);
    MONTH_NAMES
        .iter()
        .find(|(nominative, genitive, _)| {
            normalized.contains(nominative) || normalized.contains(genitive)
        })
        .map(|(_, _, month)| *month)
}
