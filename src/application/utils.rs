/// Capitalizes the first letter of every word and lowercases the rest.
/// A word starts at the beginning of the string or after any non-alphabetic character.
/// e.g. `bitcoin-cash` -> `Bitcoin-Cash`, `usd coin` -> `Usd Coin`
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// Turns a snake_case field name into a display label.
/// e.g. `twitter_screen_name` -> `Twitter Screen Name`
pub fn field_label(field: &str) -> String {
    title_case(&field.replace('_', " "))
}
