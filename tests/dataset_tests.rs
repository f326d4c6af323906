mod common;
use common::{Fixture, HEADER, write_png};
use mmpbquiz::dataset::resolve::{AsGiven, BasenameSearch, JoinedPath};
use mmpbquiz::dataset::{
    ImageResolver, LoadOptions, Rejection, ResolverChain, StrategyKind, load_questions,
};
use mmpbquiz::errors::AppError;
use mmpbquiz::models::Choice;
use std::fs;
use std::path::{Path, PathBuf};

fn options(fx: &Fixture) -> LoadOptions {
    LoadOptions {
        data_dir: fx.data_dir.clone(),
        ..Default::default()
    }
}

#[test]
fn test_strict_policy_keeps_only_contained_test_images() {
    let fx = Fixture::new("strict_policy");
    fx.image("test/a.png");
    fx.image("train/b.png");
    write_png(&fx.root.join("outside/test/c.png"));

    fx.write_csv(
        HEADER,
        &[
            "test/a.png,desc,pref,Q1?,A,red,blue,,,color,hue,l2",
            "test/missing.png,desc,pref,Q2?,A,red,blue,,,color,hue,l2",
            "train/b.png,desc,pref,Q3?,A,red,blue,,,color,hue,l2",
            "../outside/test/c.png,desc,pref,Q4?,A,red,blue,,,color,hue,l2",
            ",desc,pref,Q5?,A,red,blue,,,color,hue,l2",
        ],
    );

    let outcome = load_questions(&fx.csv, &options(&fx)).expect("load");

    assert_eq!(outcome.questions.len(), 1);
    assert_eq!(outcome.questions[0].record.question, "Q1?");
    assert_eq!(outcome.total_rows(), 5);

    let reasons: Vec<(usize, &Rejection)> =
        outcome.dropped.iter().map(|d| (d.row, &d.reason)).collect();
    assert_eq!(reasons[0], (2, &Rejection::NotFound));
    assert_eq!(reasons[1], (3, &Rejection::MissingSubdir("test".into())));
    assert!(matches!(reasons[2], (4, Rejection::OutsideBase(_))));
    assert_eq!(reasons[3], (5, &Rejection::EmptyPath));
}

#[test]
fn test_loaded_images_exist_inside_data_dir() {
    let fx = Fixture::new("loaded_inside");
    fx.image("test/a.png");
    fx.image("sub/test/b.png");
    fx.write_csv(
        HEADER,
        &[
            "test/a.png,,,Q1?,Yes,,,,,c,a,l",
            "sub/test/b.png,,,Q2?,No,,,,,c,a,l",
        ],
    );

    let outcome = load_questions(&fx.csv, &options(&fx)).expect("load");
    let base = fx.data_dir.canonicalize().unwrap();

    assert_eq!(outcome.questions.len(), 2);
    for q in &outcome.questions {
        assert!(q.image.is_file());
        assert!(q.image.starts_with(&base));
        assert_ne!(q.image, base);
    }
}

#[test]
fn test_separators_and_leading_slash_are_normalized() {
    let fx = Fixture::new("normalize");
    fx.image("test/cats/a.png");
    fx.write_csv(HEADER, &[r#""/test\cats\a.png",,,Q?,Yes,,,,,c,a,l"#]);

    let outcome = load_questions(&fx.csv, &options(&fx)).expect("load");

    assert_eq!(outcome.questions.len(), 1);
    assert!(outcome.questions[0].image.ends_with("test/cats/a.png"));
}

#[test]
fn test_labels_are_remapped_for_display() {
    let fx = Fixture::new("remap");
    fx.image("test/a.png");
    fx.write_csv(
        HEADER,
        &["test/a.png,,,Q?,Yes,,,,,overconcept,overconcept,inconsistency"],
    );

    let outcome = load_questions(&fx.csv, &options(&fx)).expect("load");
    let record = &outcome.questions[0].record;

    assert_eq!(record.category, "overconcept");
    assert_eq!(record.attribute, "appropriateness");
    assert_eq!(record.l2_category, "coherency");

    let raw = LoadOptions {
        remap_labels: false,
        ..options(&fx)
    };
    let outcome = load_questions(&fx.csv, &raw).expect("load");
    assert_eq!(outcome.questions[0].record.attribute, "overconcept");
    assert_eq!(outcome.questions[0].record.l2_category, "inconsistency");
}

#[test]
fn test_optional_columns_default_to_empty() {
    let fx = Fixture::new("optional_columns");
    fx.image("test/a.png");
    fx.write_csv("image_path,question,answer", &["test/a.png,Is it red?,Yes"]);

    let outcome = load_questions(&fx.csv, &options(&fx)).expect("load");
    let record = &outcome.questions[0].record;

    assert_eq!(record.category, "");
    assert_eq!(record.a, "");
    assert_eq!(Choice::for_record(record), Choice::yes_no());
}

#[test]
fn test_missing_required_column_is_fatal() {
    let fx = Fixture::new("missing_column");
    fx.write_csv("image_path,question", &["test/a.png,Q?"]);

    let err = load_questions(&fx.csv, &options(&fx)).unwrap_err();
    assert!(matches!(err, AppError::MissingColumn(ref c) if c == "answer"));
}

#[test]
fn test_unreadable_dataset_is_fatal() {
    let fx = Fixture::new("unreadable");
    let err = load_questions(&fx.root.join("nope.csv"), &options(&fx)).unwrap_err();
    assert!(matches!(err, AppError::DatasetRead { .. }));
}

#[test]
fn test_ragged_row_is_fatal() {
    let fx = Fixture::new("ragged");
    fx.image("test/a.png");
    fx.write_csv("image_path,question,answer", &["test/a.png,Q?,Yes,extra"]);

    let err = load_questions(&fx.csv, &options(&fx)).unwrap_err();
    assert!(matches!(err, AppError::Csv(_)));
}

#[test]
fn test_missing_data_dir_is_fatal() {
    let fx = Fixture::new("missing_data_dir");
    fx.write_csv("image_path,question,answer", &["test/a.png,Q?,Yes"]);

    let opts = LoadOptions {
        data_dir: fx.root.join("no_such_dir"),
        ..Default::default()
    };
    let err = load_questions(&fx.csv, &opts).unwrap_err();
    assert!(matches!(err, AppError::DataDir(_)));
}

#[test]
fn test_fallback_strategies_resolve_inside_data_dir() {
    let fx = Fixture::new("fallback");
    fx.image("test/a.png");
    fx.image("test/cat/pic.png");
    fx.write_csv(
        HEADER,
        &[
            "mmpb/images/test/a.png,,,Q1?,Yes,,,,,c,a,l",
            "x/y/cat/pic.png,,,Q2?,Yes,,,,,c,a,l",
        ],
    );

    let strict = load_questions(&fx.csv, &options(&fx)).expect("load");
    assert!(strict.questions.is_empty());

    let opts = LoadOptions {
        strategies: vec![
            StrategyKind::Joined,
            StrategyKind::StrippedPrefix,
            StrategyKind::BasenameSearch,
        ],
        ..options(&fx)
    };
    let outcome = load_questions(&fx.csv, &opts).expect("load");

    assert_eq!(outcome.questions.len(), 2);
    assert!(outcome.questions[0].image.ends_with("test/a.png"));
    assert!(outcome.questions[1].image.ends_with("test/cat/pic.png"));
}

#[test]
fn test_required_subdir_can_be_disabled() {
    let fx = Fixture::new("no_subdir");
    fx.image("train/b.png");
    fx.write_csv("image_path,question,answer", &["train/b.png,Q?,Yes"]);

    let opts = LoadOptions {
        required_subdir: None,
        ..options(&fx)
    };
    let outcome = load_questions(&fx.csv, &opts).expect("load");
    assert_eq!(outcome.questions.len(), 1);
}

#[test]
fn test_as_given_absolute_path_is_still_contained() {
    let fx = Fixture::new("as_given");
    let inside = fx.image("test/a.png");
    let outside = fx.root.join("elsewhere/test/b.png");
    write_png(&outside);

    let chain = ResolverChain::new(
        &fx.data_dir,
        &[StrategyKind::Joined, StrategyKind::AsGiven],
        Some("test"),
    )
    .expect("chain");

    assert_eq!(chain.strategy_names(), vec!["joined", "as-given"]);

    let resolved = chain.resolve(&inside.to_string_lossy()).expect("inside");
    assert_eq!(resolved, inside.canonicalize().unwrap());

    let refused = chain.resolve(&outside.to_string_lossy()).unwrap_err();
    assert!(matches!(refused, Rejection::OutsideBase(_)));
}

#[cfg(unix)]
#[test]
fn test_symlink_out_of_data_dir_is_rejected() {
    let fx = Fixture::new("symlink");
    let secret = fx.root.join("secret.png");
    write_png(&secret);
    std::fs::create_dir_all(fx.data_dir.join("test")).unwrap();
    std::os::unix::fs::symlink(&secret, fx.data_dir.join("test/link.png")).unwrap();

    let chain = ResolverChain::new(&fx.data_dir, &[StrategyKind::Joined], Some("test")).unwrap();
    let refused = chain.resolve("test/link.png").unwrap_err();
    assert!(matches!(refused, Rejection::OutsideBase(_)));
}

/// Always proposes the same file, wherever it is.
struct Fixed(PathBuf);

impl ImageResolver for Fixed {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn try_resolve(&self, _raw: &str) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}

#[test]
fn test_custom_strategy_goes_through_containment() {
    let fx = Fixture::new("custom_strategy");
    let inside = fx.image("test/a.png");
    let outside = fx.root.join("test/b.png");
    write_png(&outside);

    let escaping = ResolverChain::with_strategies(
        &fx.data_dir,
        vec![Box::new(Fixed(outside)) as Box<dyn ImageResolver>],
        Some("test"),
    )
    .unwrap();
    assert!(matches!(
        escaping.resolve("anything"),
        Err(Rejection::OutsideBase(_))
    ));

    // first refusal is reported, a later strategy may still succeed
    let chain = ResolverChain::with_strategies(
        &fx.data_dir,
        vec![
            Box::new(JoinedPath::new(Path::new(&fx.data_dir))) as Box<dyn ImageResolver>,
            Box::new(AsGiven) as Box<dyn ImageResolver>,
            Box::new(Fixed(inside.clone())) as Box<dyn ImageResolver>,
        ],
        Some("test"),
    )
    .unwrap();
    assert_eq!(
        chain.resolve("does/not/exist.png").unwrap(),
        inside.canonicalize().unwrap()
    );
}

#[test]
fn test_empty_strategy_list_is_a_config_error() {
    let fx = Fixture::new("no_strategies");
    let err = ResolverChain::new(&fx.data_dir, &[], None).err().unwrap();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn test_byte_order_mark_is_tolerated() {
    let fx = Fixture::new("bom_header");
    fx.image("test/a.png");
    fs::write(&fx.csv, "\u{feff}image_path,question,answer\ntest/a.png,Q?,Yes\n").unwrap();

    let outcome = load_questions(&fx.csv, &options(&fx)).expect("load");

    assert_eq!(outcome.questions.len(), 1);
    assert_eq!(outcome.questions[0].record.image_path, "test/a.png");
    assert!(outcome.dropped.is_empty());
}

#[test]
fn test_invalid_utf8_is_fatal() {
    let fx = Fixture::new("invalid_utf8");
    fx.image("test/a.png");
    let mut bytes = b"image_path,question,answer\ntest/a.png,Is it ".to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe]);
    bytes.extend_from_slice(b"?,Yes\n");
    fs::write(&fx.csv, bytes).unwrap();

    let err = load_questions(&fx.csv, &options(&fx)).unwrap_err();
    assert!(matches!(err, AppError::Csv(_)));
}

#[test]
fn test_whitespace_in_image_path_is_kept() {
    let fx = Fixture::new("path_whitespace");
    fx.image("test/a.png");
    fx.write_csv(
        "image_path,question,answer",
        &["test/a.png,Q1?,Yes", " test/a.png ,Q2?,Yes"],
    );

    let outcome = load_questions(&fx.csv, &options(&fx)).expect("load");

    assert_eq!(outcome.questions.len(), 1);
    assert_eq!(outcome.dropped[0].row, 2);
    assert_eq!(outcome.dropped[0].reason, Rejection::NotFound);
}

#[test]
fn test_basename_search_walks_in_sorted_order() {
    let fx = Fixture::new("basename_order");
    fx.image("b/test/cat/pic.png");
    fx.image("a/test/cat/pic.png");
    fx.image("a/test/dog/pic.png");

    let search = BasenameSearch::new(&fx.data_dir);
    for _ in 0..3 {
        let found = search.try_resolve("x/y/cat/pic.png").expect("found");
        assert_eq!(found, fx.data_dir.join("a/test/cat/pic.png"));
    }

    assert!(search.try_resolve("x/y/bird/pic.png").is_none());
    assert!(search.try_resolve("pic.png").is_none());
}

#[cfg(unix)]
#[test]
fn test_basename_search_skips_symlinked_directories() {
    let fx = Fixture::new("basename_symlink");
    fx.image("z_real/test/cat/pic.png");
    std::os::unix::fs::symlink(fx.data_dir.join("z_real"), fx.data_dir.join("a_link")).unwrap();

    let found = BasenameSearch::new(&fx.data_dir)
        .try_resolve("x/y/cat/pic.png")
        .expect("found");

    // a_link sorts first but is never entered
    assert_eq!(found, fx.data_dir.join("z_real/test/cat/pic.png"));
}
