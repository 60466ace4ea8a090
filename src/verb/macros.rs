/// Build the forms of one polarity, keyed by mood.
///
/// Values are anything which converts into alternatives, so either a single
/// [`Inflection`] or an array of them.
///
/// [`Inflection`]: crate::inflection::Inflection
macro_rules! forms {
    ($($mood:ident => $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut forms = $crate::inflection::Forms::new();
        $(forms.insert($crate::inflection::Mood::$mood, $value.into());)*
        forms
    }};
}
