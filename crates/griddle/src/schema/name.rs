use heck::ToSnakeCase;

/// Derives the backing table name for a model name.
///
/// The model name is snake-cased and then pluralized using English rules.
/// Irregular plurals are best-effort.
pub fn table_name_for_model(model_name: &str) -> String {
    pluralizer::pluralize(&model_name.to_snake_case(), 2, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_lowercased_plural() {
        assert_eq!("songs", table_name_for_model("Song"));
        assert_eq!("albums", table_name_for_model("Album"));
    }

    #[test]
    fn snake_cases_multi_word_names() {
        assert_eq!("play_lists", table_name_for_model("PlayList"));
    }

    #[test]
    fn handles_irregular_plurals() {
        assert_eq!("people", table_name_for_model("Person"));
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(table_name_for_model("Song"), table_name_for_model("Song"));
    }
}
