use super::common::*;
use crate::workflows::engagement::domain::{EventKind, LeadTemperature};

#[test]
fn worked_example_scores_sixty_seven_and_classifies_hot() {
    let engine = scoring_engine();
    let events = worked_example_events("s1");

    // video 80 * 0.30 + chapter 60 * 0.25 + cta 50 * 0.20
    //   + time 100 * 0.10 + profile 55 * 0.15 = 67.25 -> 67
    let outcome = engine.score(&events, &identified_profile(), 5);

    assert_eq!(outcome.engagement_score, 67);
    assert_eq!(outcome.lead_temperature, LeadTemperature::Hot);
    assert_eq!(outcome.breakdown.video_engagement, 80);
    assert_eq!(outcome.breakdown.chapter_completion, 60);
    assert_eq!(outcome.breakdown.cta_interactions, 50);
    assert_eq!(outcome.breakdown.time_investment, 100);
    assert_eq!(outcome.breakdown.profile_completeness, 55);
    assert_eq!(outcome.breakdown.event_count, 7);
}

#[test]
fn cta_sub_score_grows_monotonically_and_saturates_at_four() {
    let engine = scoring_engine();
    let mut previous = 0;

    for count in 1..=4 {
        let events: Vec<_> = (0..count)
            .map(|_| event("s1", EventKind::CtaClick))
            .collect();
        let outcome = engine.score(&events, &anonymous_profile(), 0);
        assert!(
            outcome.breakdown.cta_interactions > previous,
            "cta sub-score must strictly increase up to the cap"
        );
        previous = outcome.breakdown.cta_interactions;
    }
    assert_eq!(previous, 100);

    let events: Vec<_> = (0..9)
        .map(|_| event("s1", EventKind::CtaClick))
        .collect();
    let outcome = engine.score(&events, &anonymous_profile(), 0);
    assert_eq!(outcome.breakdown.cta_interactions, 100);
}

#[test]
fn time_sub_score_saturates_at_the_five_minute_mark() {
    let engine = scoring_engine();

    let outcome = engine.score(&[video_event("s1", 0.0, 450)], &anonymous_profile(), 0);
    assert_eq!(outcome.breakdown.time_investment, 100);

    let outcome = engine.score(&[video_event("s1", 0.0, 150)], &anonymous_profile(), 0);
    assert_eq!(outcome.breakdown.time_investment, 50);
}

#[test]
fn zero_chapter_denominator_yields_zero_not_an_error() {
    let engine = scoring_engine();
    let events = vec![chapter_event("s1", "exp-a", "ch-1")];

    let outcome = engine.score(&events, &anonymous_profile(), 0);

    assert_eq!(outcome.breakdown.chapter_completion, 0);
}

#[test]
fn maximal_inputs_cap_the_score_at_one_hundred() {
    let engine = scoring_engine();
    let mut events = vec![
        video_event("s1", 100.0, 4000),
        chapter_event("s1", "exp-a", "ch-1"),
        chapter_event("s1", "exp-a", "ch-2"),
    ];
    for _ in 0..6 {
        events.push(event("s1", EventKind::BookDemo));
    }

    let outcome = engine.score(&events, &complete_profile(), 2);

    assert_eq!(outcome.engagement_score, 100);
    assert_eq!(outcome.lead_temperature, LeadTemperature::Qualified);
}

#[test]
fn temperature_boundaries_belong_to_the_higher_bucket() {
    assert_eq!(LeadTemperature::from_score(76), LeadTemperature::Qualified);
    assert_eq!(LeadTemperature::from_score(75), LeadTemperature::Hot);
    assert_eq!(LeadTemperature::from_score(51), LeadTemperature::Hot);
    assert_eq!(LeadTemperature::from_score(50), LeadTemperature::Warm);
    assert_eq!(LeadTemperature::from_score(26), LeadTemperature::Warm);
    assert_eq!(LeadTemperature::from_score(25), LeadTemperature::Cold);
    assert_eq!(LeadTemperature::from_score(0), LeadTemperature::Cold);
    assert_eq!(LeadTemperature::from_score(100), LeadTemperature::Qualified);
}

#[test]
fn classification_is_total_and_monotonic_over_the_score_range() {
    fn rank(temperature: LeadTemperature) -> u8 {
        match temperature {
            LeadTemperature::Cold => 0,
            LeadTemperature::Warm => 1,
            LeadTemperature::Hot => 2,
            LeadTemperature::Qualified => 3,
        }
    }

    let mut previous = rank(LeadTemperature::from_score(0));
    for score in 1..=100u8 {
        let current = rank(LeadTemperature::from_score(score));
        assert!(current >= previous, "bucket must not cool as score rises");
        previous = current;
    }
}
