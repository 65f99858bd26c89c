/// Levenshtein distance between `a` and `b`, counted in characters.
///
/// Row `i` of the table holds the edits needed to turn the first `i`
/// characters of `a` into each prefix of `b`; only two rows are kept.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous_row: Vec<usize> = (0..=b.len()).collect();
    let mut current_row = vec![0; b.len() + 1];
    for (i, &a_char) in a.iter().enumerate() {
        current_row[0] = i + 1;
        for (j, &b_char) in b.iter().enumerate() {
            current_row[j + 1] = if a_char == b_char {
                previous_row[j]
            } else {
                1 + previous_row[j + 1].min(current_row[j]).min(previous_row[j])
            };
        }
        std::mem::swap(&mut previous_row, &mut current_row);
    }
    previous_row[b.len()]
}
