mod common;

use common::assert_pp;
use once_cell::sync::Lazy;
use stream_pretty_printer::{
    arglist, comma_separated, dotted_list, funcall, pretty_print, text, Doc,
};

static QUERY: Lazy<Doc> = Lazy::new(|| {
    dotted_list(vec![
        text("db"),
        funcall("table", vec![text("\"users\"")]),
        funcall("filter", vec![text("pred")]),
    ])
});

#[test]
fn dotted_chain_fits_on_one_line() {
    assert_pp(&QUERY, 80, &[r#"db.table("users").filter(pred)"#]);
}

#[test]
fn dotted_chain_breaks_with_dots_aligned() {
    assert_pp(
        &QUERY,
        20,
        //  0    5   10   15   20
        &[
            r#"db.table("users")"#,
            r#"  .filter(pred)"#,
        ],
    );
}

#[test]
fn short_dotted_chain() {
    let doc = dotted_list(vec![text("a"), text("b"), text("c")]);
    assert_pp(&doc, 80, &["a.b.c"]);
    assert_pp(&doc, 3, &["a.b", " .c"]);
}

#[test]
fn first_dot_never_breaks() {
    let doc = dotted_list(vec![text("alpha"), text("beta")]);
    assert_pp(&doc, 1, &["alpha.beta"]);
}

#[test]
fn dotted_list_edge_cases() {
    assert_pp(&dotted_list(vec![]), 80, &[""]);
    assert_pp(&dotted_list(vec![text("solo")]), 1, &["solo"]);
}

#[test]
fn empty_argument_list() {
    assert_pp(&funcall("reset", vec![]), 80, &["reset()"]);
    assert_pp(&funcall("reset", vec![]), 0, &["reset()"]);
}

#[test]
fn comma_list_shares_one_indentation_scope() {
    let doc = funcall("insert", vec![text("alpha"), text("beta"), text("gamma")]);
    assert_pp(&doc, 80, &["insert(alpha, beta, gamma)"]);
    assert_pp(
        &doc,
        24,
        //  0    5   10   15   20
        &[
            "insert(alpha,",
            "       beta,",
            "       gamma)",
        ],
    );
}

#[test]
fn argument_group_fits_up_to_its_own_last_character() {
    let doc = funcall("insert", vec![text("alpha"), text("beta"), text("gamma")]);
    assert_pp(&doc, 25, &["insert(alpha, beta, gamma)"]);
}

#[test]
fn comma_separated_alone() {
    let doc = comma_separated(vec![text("x"), text("y")]);
    assert_pp(&doc, 80, &["x, y"]);
    assert_pp(&doc, 2, &["x,", "y"]);
}

#[test]
fn arglist_wraps_in_parens() {
    assert_pp(&arglist(vec![text("q")]), 80, &["(q)"]);
}

#[test]
fn nested_calls_break_outside_in() {
    let doc = funcall(
        "wrap",
        vec![
            funcall("inner", vec![text("one"), text("two")]),
            text("three"),
        ],
    );
    assert_pp(&doc, 80, &["wrap(inner(one, two), three)"]);
    assert_pp(
        &doc,
        26,
        //  0    5   10   15   20   25
        &[
            "wrap(inner(one, two),",
            "     three)",
        ],
    );
    assert_pp(
        &doc,
        12,
        //  0    5   10   15
        &[
            "wrap(inner(one,",
            "           two),",
            "     three)",
        ],
    );
}

#[test]
fn wider_pages_never_break_more() {
    let nested = funcall(
        "wrap",
        vec![
            funcall("inner", vec![text("one"), text("two")]),
            text("three"),
        ],
    );
    for doc in [&*QUERY, &nested] {
        let mut previous = usize::MAX;
        for width in 0..=40 {
            let breaks = pretty_print(width, doc).matches('\n').count();
            assert!(
                breaks <= previous,
                "break count increased at width {}",
                width
            );
            previous = breaks;
        }
    }
}
