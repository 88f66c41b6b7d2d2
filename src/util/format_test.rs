use super::*;

#[test]
fn compare_titles_ignores_case_first() {
    assert_eq!(compare_titles("alien", "Blade Runner"), Ordering::Less);
    assert_eq!(compare_titles("Zodiac", "avatar"), Ordering::Greater);
}

#[test]
fn compare_titles_breaks_case_ties_deterministically() {
    assert_ne!(compare_titles("Up", "UP"), Ordering::Equal);
    assert_eq!(compare_titles("Up", "UP"), compare_titles("UP", "Up").reverse());
}

#[test]
fn collation_key_folds_accents_and_case() {
    assert_eq!(collation_key("Éclair"), "eclair");
    assert_eq!(collation_key("Ōkami"), "okami");
    assert_eq!(collation_key("AMÉLIE"), "amelie");
}

#[cfg(not(feature = "csr"))]
#[test]
fn accented_titles_sort_with_their_base_letter() {
    let mut titles = vec!["Zodiac", "Éclair", "Amélie", "Ōkami", "Brazil"];
    titles.sort_by(|a, b| compare_titles(a, b));
    assert_eq!(titles, ["Amélie", "Brazil", "Éclair", "Ōkami", "Zodiac"]);
}

#[cfg(not(feature = "csr"))]
#[test]
fn accent_only_difference_is_still_ordered() {
    assert_ne!(compare_titles("Eclair", "Éclair"), Ordering::Equal);
    assert_eq!(compare_titles("Eclair", "Éclair"), compare_titles("Éclair", "Eclair").reverse());
}

#[test]
fn rating_label_formats_one_decimal() {
    assert_eq!(rating_label(Some(8.44)), "8.4");
    assert_eq!(rating_label(Some(0.0)), "N/A");
    assert_eq!(rating_label(None), "N/A");
}

#[test]
fn year_label_takes_leading_component() {
    assert_eq!(year_label(Some("2010-07-15")), "2010");
    assert_eq!(year_label(Some("")), "N/A");
    assert_eq!(year_label(None), "N/A");
}

#[test]
fn runtime_label_hides_unknown_runtime() {
    assert_eq!(runtime_label(Some(&Runtime::Minutes(148))).as_deref(), Some("148m"));
    assert_eq!(runtime_label(Some(&Runtime::Text("N/A".to_owned()))), None);
    assert_eq!(runtime_label(None), None);
}

#[test]
fn similarity_label_trims_trailing_zeros() {
    assert_eq!(similarity_label(Some(87.35)).as_deref(), Some("87.35% Match"));
    assert_eq!(similarity_label(Some(90.0)).as_deref(), Some("90% Match"));
    assert_eq!(similarity_label(None), None);
}

#[test]
fn star_slots_round_half_rating() {
    assert_eq!(star_slots(8.4), [true, true, true, true, false]);
    assert_eq!(star_slots(10.0), [true; 5]);
    assert_eq!(star_slots(0.0), [false; 5]);
    assert_eq!(star_slots(-3.0), [false; 5]);
}

#[test]
fn excerpt_cuts_on_char_boundary() {
    assert_eq!(excerpt("short", 10), "short");
    assert_eq!(excerpt("héllo wörld", 5), "héllo...");
}
