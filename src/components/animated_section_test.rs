use super::*;

#[test]
fn default_reveal_is_fade_in_up() {
    assert_eq!(Reveal::default(), Reveal::FadeInUp);
}

#[test]
fn hidden_sections_are_offset_by_direction() {
    assert_eq!(section_class("", Reveal::FadeInUp, false), "animated-section opacity-0 translate-y-10");
    assert_eq!(section_class("", Reveal::FadeInDown, false), "animated-section opacity-0 -translate-y-10");
}

#[test]
fn visible_sections_settle_regardless_of_direction() {
    for reveal in [Reveal::FadeInUp, Reveal::FadeInDown] {
        assert_eq!(section_class("bg-navy", reveal, true), "animated-section bg-navy opacity-100 translate-y-0");
    }
}

#[test]
fn extra_classes_precede_state() {
    let class = section_class("py-20 bg-dark", Reveal::FadeInUp, false);
    assert!(class.starts_with("animated-section py-20 bg-dark "));
    assert!(class.ends_with(Reveal::FadeInUp.hidden_class()));
}
