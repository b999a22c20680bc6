//! Range normalization integration test

use eolian::commands::{CommandRouter, SlashOptions};
use eolian::directives::{AbsoluteRange, RangeArgument, SyntaxType, UserPermission, range_option};

#[test]
fn test_reference_ranges() {
    use eolian::directives::normalize;

    assert_eq!(
        normalize(&RangeArgument::first(100), 50, false),
        AbsoluteRange { start: 0, stop: 100 }
    );
    assert_eq!(
        normalize(&RangeArgument::between(4, 10), 50, false),
        AbsoluteRange { start: 3, stop: 9 }
    );
    assert_eq!(
        normalize(&RangeArgument::between(5, -5), 50, false),
        AbsoluteRange { start: 4, stop: 46 }
    );
}

#[test]
fn test_list_slicing_from_message() {
    let router = CommandRouter::new(&Default::default()).unwrap();
    let queue: Vec<u32> = (1..=20).collect();

    let parsed = router
        .parse_message("!list bottom 3", UserPermission::User, SyntaxType::Keyword)
        .unwrap();
    let range = range_option(&parsed.options, queue.len()).unwrap();
    let span = range.clamp(queue.len());
    assert_eq!(&queue[span], &[18, 19, 20]);

    let parsed = router
        .parse_slash(
            "list",
            &SlashOptions::new().with("range", "top 2:4"),
            UserPermission::User,
        )
        .unwrap();
    let range = range_option(&parsed.options, queue.len()).unwrap();
    assert_eq!(&queue[range.clamp(queue.len())], &[2, 3]);

    let parsed = router
        .parse_message("!list", UserPermission::User, SyntaxType::Keyword)
        .unwrap();
    assert!(range_option(&parsed.options, queue.len()).is_none());
}
