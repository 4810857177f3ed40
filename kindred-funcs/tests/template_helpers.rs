//! Helpers called by name, the way a template host pipes data into them.

use std::collections::HashMap;

use kindred_funcs::{Dynamic, FuncError, FuncMap};
use kindred_testhelpers::{args, ptr, test};

fn render(name: &str, args: &[Dynamic]) -> String {
    FuncMap::standard()
        .call(name, args)
        .unwrap_or_else(|err| panic!("{name} failed: {err}"))
        .to_string()
}

/// `{{data | name fixed...}}`: the piped value lands last.
fn piped(name: &str, fixed: &[Dynamic], data: impl Into<Dynamic>) -> String {
    let mut all = fixed.to_vec();
    all.push(data.into());
    render(name, &all)
}

#[test]
fn is_true_over_host_values() {
    let cases: Vec<(Dynamic, &str)> = vec![
        ("ok".into(), "true"),
        ("".into(), "false"),
        (0.into(), "false"),
        (1.into(), "true"),
        (Vec::<u8>::new().into(), "false"),
        (b"x".to_vec().into(), "true"),
    ];
    for (data, want) in cases {
        assert_eq!(render("is_true", &[data.clone()]), want, "{data:?}");
        let negated = if want == "true" { "false" } else { "true" };
        assert_eq!(render("is_empty", &[data]), negated);
    }
}

#[test]
fn default_pipes_the_value_last() {
    let nok = args(["NOK"]);
    assert_eq!(piped("default", &nok, "OK"), "OK");
    assert_eq!(piped("default", &nok, ""), "NOK");
    assert_eq!(piped("default", &nok, 0), "NOK");
    assert_eq!(piped("default", &nok, 1), "1");
    assert_eq!(piped("default", &nok, Vec::<i32>::new()), "NOK");
    assert_eq!(piped("default", &nok, vec![1, 2, 3]), "[1 2 3]");
    assert_eq!(piped("default", &nok, HashMap::<String, String>::new()), "NOK");
    assert_eq!(
        piped("default", &nok, HashMap::from([("x", "y")])),
        "map[x:y]"
    );
}

#[test]
fn yesno_pipes_the_value_last() {
    let choices = args(["OK", "NOK"]);
    assert_eq!(piped("yesno", &choices, "ok"), "OK");
    assert_eq!(piped("yesno", &choices, ""), "NOK");
    assert_eq!(piped("yesno", &choices, 1), "OK");
    assert_eq!(piped("yesno", &choices, 0), "NOK");
    assert_eq!(piped("yesno", &choices, true), "OK");
    assert_eq!(piped("yesno", &choices, false), "NOK");
}

#[test]
fn coalesce_picks_first_meaningful() {
    assert_eq!(render("coalesce", &args(["1", "2", "3"])), "1");
    assert_eq!(render("coalesce", &args(["", "2", "3"])), "2");
    assert_eq!(render("coalesce", &args([false, true, false])), "true");
    assert_eq!(render("coalesce", &args([true, false, false])), "true");
    insta::assert_snapshot!(render("coalesce", &args(["", ""])), @"<nil>");
    insta::assert_snapshot!(render("coalesce", &[]), @"<nil>");
}

#[test]
fn contains_through_the_registry() {
    let int_map = || Dynamic::from(HashMap::from([(0, 0), (1, 1), (2, 2)]));

    assert_eq!(render("contains", &args(["hellox", "x"])), "true");
    assert_eq!(render("contains", &args(["hello", "x"])), "false");
    assert_eq!(
        render("contains", &[vec!["y", "x"].into(), "x".into()]),
        "true"
    );
    assert_eq!(render("contains", &[int_map(), 0.into(), 1.into(), 2.into()]), "true");
    assert_eq!(render("contains", &args([1, 1])), "false");
    assert_eq!(render("contains", &[ptr(vec![1, 2]), 1.into()]), "true");
    assert_eq!(render("contains_any", &[int_map(), 5.into(), 6.into(), 2.into()]), "true");
    assert_eq!(
        render("contains_any", &args(["my name is jack", "x", "y"])),
        "true"
    );
    assert_eq!(
        render("contains_any", &args(["mi name is jack", "x", "y"])),
        "false"
    );
}

#[test]
fn contains_with_nil_arguments() {
    assert_eq!(render("contains", &[Dynamic::nil(), Dynamic::nil()]), "false");
    let list = Dynamic::from(vec![Dynamic::from(1), Dynamic::nil()]);
    assert_eq!(render("contains", &[list, Dynamic::nil()]), "true");
}

#[test]
fn eq_any_across_numeric_kinds() {
    assert_eq!(render("eq_any", &args([1.2, 1.0, 2.9, 2.0, 1.2])), "true");
    assert_eq!(render("eq_any", &args([7.2, 1.0, 2.9, 2.0, 1.2])), "false");
    assert_eq!(render("eq_any", &args(["a", "b", "a"])), "true");
    assert_eq!(render("eq_any", &[ptr(5), 4.into(), 5u8.into()]), "true");
    assert_eq!(render("eq_any", &args(["x"])), "false");
}

#[test]
fn repeat_pipes_the_value_last() {
    assert_eq!(piped("repeat", &args([3]), "x"), "xxx");
    assert_eq!(piped("repeat", &args([3]), 3), "333");
    assert_eq!(piped("repeat", &args([3]), true), "truetruetrue");
    assert_eq!(piped("repeat", &args([3]), 1), "111");
    assert_eq!(piped("repeat", &args([3]), ptr(5)), "555");

    let out = FuncMap::standard()
        .call("repeat", &[3.into(), 1.into()])
        .unwrap();
    assert!(matches!(out, Dynamic::String(_)));
}

#[test]
fn join_flattens_every_argument() {
    let out = render(
        "join",
        &[
            ",".into(),
            1.into(),
            "2".into(),
            3.into(),
            HashMap::from([("x", 1), ("y", 2)]).into(),
        ],
    );
    assert!(out == "1,2,3,1,2" || out == "1,2,3,2,1", "{out}");

    assert_eq!(
        render("join", &[",".into(), 1.into(), "2".into(), 3.into(), vec![1, 2].into()]),
        "1,2,3,1,2"
    );

    let five = ptr(5);
    let mixed = ptr(vec![
        Dynamic::from("1"),
        Dynamic::from(2),
        Dynamic::from(3.0),
        Dynamic::from(4.1),
        five.clone(),
        Dynamic::from(true),
    ]);
    assert_eq!(piped("join", &args([","]), mixed), "1,2,3,4.1,5,true");

    let mut numbers = args([",", "1", "2", "3", "4"]);
    numbers.push(five);
    insta::assert_snapshot!(render("join", &numbers), @"1,2,3,4,5");
}

#[test]
fn arithmetic_helpers() {
    assert_eq!(render("mul", &args([1, 2, 3])), "6");
    assert_eq!(render("mul", &args([1, 2, 3, 0])), "0");
    assert_eq!(render("div", &args([1, 2, 2])), "0.25");
    assert_eq!(render("div", &args([2, 1, 1, 1])), "2");
    assert_eq!(render("add", &args([1, 2, 3, 0])), "6");
    assert_eq!(render("sum", &args([1, 2, 3, -1, 1, 0])), "6");
    assert_eq!(render("sub", &args([1, 2, 3])), "-4");
    assert_eq!(render("pow", &[2.into(), 2.into(), 2.0.into()]), "16");

    let Dynamic::Number(total) = FuncMap::standard()
        .call("add", &args([2.1, 2.1, 2.1]))
        .unwrap()
    else {
        panic!("add must return a number");
    };
    assert_eq!(format!("{:.2}", total.to_f64()), "6.30");
}

#[test]
fn arithmetic_rejects_non_numbers() {
    let err = FuncMap::standard()
        .call("add", &[1.into(), vec![1].into()])
        .unwrap_err();
    insta::assert_snapshot!(err, @"value must be numeric, got sequence");

    let err = FuncMap::standard()
        .call("mul", &args(["2", "two"]))
        .unwrap_err();
    assert!(matches!(err, FuncError::Kind(_)));
}

#[test]
fn file_size_formats() {
    assert_eq!(render("file_size", &args([10])), "10 bytes");
    assert_eq!(render("file_size", &args([1024])), "1 KB");
    assert_eq!(render("file_size", &args([1536])), "1.5 KB");
    assert_eq!(render("file_size", &args([1u64 << 20])), "1 MB");
    assert_eq!(render("file_size", &args([(1u64 << 30) * 3 / 2])), "1.5 GB");
    assert_eq!(render("file_size", &args([1u64 << 40])), "1 TB");
    assert_eq!(render("file_size", &args([1u64 << 50])), "1 PB");
    assert_eq!(render("file_size", &args(["10"])), "");
}

#[test]
fn to_string_prints_canonically() {
    insta::assert_snapshot!(render("to_string", &[ptr(vec![1, 2])]), @"[1 2]");
    insta::assert_snapshot!(render("to_string", &args([2.5f32])), @"2.5");
    insta::assert_snapshot!(render("to_string", &[Dynamic::nil()]), @"<nil>");
}
