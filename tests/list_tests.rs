use insta::assert_snapshot;
use std::io::ErrorKind;
use twrap::TwConf;

mod common;
use common::*;

fn sample_list() -> Vec<&'static str> {
    vec![
        "entry with no path parts",
        "entry1",
        "part1/part2/entry2",
        "part1/part2/entry3",
        "part1/part2/entry4",
        "part1/part3/entry6 with some trailing text",
        "part1/part4/entry7",
        "part5/entry8",
        "part5/part6/entry9",
        "/part5/part7/entry10",
        "/part5//part7/entry11",
        "/part5/part7/entry12",
    ]
}

#[test]
fn test_list_wraps_under_entry_text() {
    let entries = ["short", "a longer entry that will need to wrap onto more lines"];
    let out = render(|b| small_conf().list(b, &entries, 2));
    assert_snapshot!(visible(&out), @r"
    |  - short|
    |  - a longer entry|
    |    that will need|
    |    to wrap onto|
    |    more lines|
    ");
}

#[test]
fn test_idx_list() {
    let entries = ["e1", "e2", "e3", "x y z w v u t s r q p o n"];
    let out = render(|b| small_conf().idx_list(b, &entries, 0));
    assert_snapshot!(visible(&out), @r"
    |- 1: e1|
    |- 2: e2|
    |- 3: e3|
    |- 4: x y z w v u t s|
    |     r q p o n|
    ");
}

#[test]
fn test_idx_list_index_width_is_stable() {
    let entries: Vec<String> = (1..=11).map(|i| format!("item{}", i)).collect();
    let out = render(|b| TwConf::default().idx_list(b, &entries, 0));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "-  1: item1");
    assert_eq!(lines[8], "-  9: item9");
    assert_eq!(lines[10], "- 11: item11");
    for line in &lines {
        assert_eq!(&line[4..6], ": ");
    }
}

#[test]
fn test_custom_marker() {
    let conf = TwConf::builder().list_marker("* ").build().unwrap();
    let out = render(|b| conf.no_rpt_list(b, &["abc", "abd"], 1));
    assert_eq!(out, " * abc\n *   d\n");
}

#[test]
fn test_empty_list_prints_nothing() {
    let conf = small_conf();
    let entries: [&str; 0] = [];
    assert!(render(|b| conf.list(b, &entries, 3)).is_empty());
    assert!(render(|b| conf.idx_list(b, &entries, 3)).is_empty());
    assert!(render(|b| conf.no_rpt_list(b, &entries, 3)).is_empty());
    assert!(render(|b| conf.idx_no_rpt_path_list(b, &entries, 3)).is_empty());
}

#[test]
fn test_no_rpt_list() {
    let entries = ["/abc/def/123", "/abc/def/124", "/abc/ghi/123"];
    let out = render(|b| small_conf().no_rpt_list(b, &entries, 4));
    assert_snapshot!(visible(&out), @r"
    |    - /abc/def/123|
    |    -            4|
    |    -      ghi/123|
    ");
}

#[test]
fn test_no_rpt_list_is_not_wrapped() {
    let long = "a very long entry that goes well past the twenty character target";
    let out = render(|b| small_conf().no_rpt_list(b, &[long], 0));
    assert_eq!(out, format!("- {}\n", long));
}

#[test]
fn test_idx_no_rpt_list() {
    let list = sample_list();
    let out = render(|b| small_conf().idx_no_rpt_list(b, &list[..5], 0));
    assert_snapshot!(visible(&out), @r"
    |- 1: entry with no path parts|
    |- 2:      1|
    |- 3: part1/part2/entry2|
    |- 4:                  3|
    |- 5:                  4|
    ");
}

#[test]
fn test_no_rpt_list_state_resets_between_calls() {
    let conf = small_conf();
    let mut buf = Vec::new();
    conf.no_rpt_list(&mut buf, &["abc"], 0).unwrap();
    conf.no_rpt_list(&mut buf, &["abc"], 0).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "- abc\n- abc\n");
}

#[test]
fn test_no_rpt_list_reconstructs_entries() {
    let entries = [
        "alpha", "alphabet", "alpine", "beta", "be", "bet", "été", "étés", "",
        "x",
    ];
    let out = render(|b| TwConf::default().no_rpt_list(b, &entries, 0));

    let mut prev: Vec<char> = Vec::new();
    for (line, entry) in out.lines().zip(entries) {
        let body: Vec<char> = line.strip_prefix("- ").unwrap().chars().collect();
        let rebuilt: String = body
            .iter()
            .enumerate()
            .map(|(i, &c)| if c == ' ' { prev[i] } else { c })
            .collect();
        assert_eq!(rebuilt, entry);
        prev = entry.chars().collect();
    }
    assert_eq!(out.lines().count(), entries.len());
}

#[test]
fn test_no_rpt_path_list() {
    let out = render(|b| small_conf().no_rpt_path_list(b, &sample_list(), 0));
    assert_snapshot!(visible(&out), @r"
    |- entry with no path parts|
    |- entry1|
    |- part1/part2/entry2|
    |-             entry3|
    |-             entry4|
    |-       part3/entry6 with some trailing text|
    |-       part4/entry7|
    |- part5/entry8|
    |-       part6/entry9|
    |- /part5/part7/entry10|
    |-        /part7/entry11|
    |-        part7/entry12|
    ");
}

#[test]
fn test_no_rpt_path_list_keeps_repeated_leaf() {
    let entries = ["/abc/def/123", "/abc/def/123", "/abc/def/124", "/abc/ghi/123"];
    let out = render(|b| small_conf().no_rpt_path_list(b, &entries, 2));
    assert_snapshot!(visible(&out), @r"
    |  - /abc/def/123|
    |  -          123|
    |  -          124|
    |  -      ghi/123|
    ");
}

#[test]
fn test_idx_no_rpt_path_list() {
    let out = render(|b| small_conf().idx_no_rpt_path_list(b, &sample_list(), 2));
    assert_snapshot!(visible(&out), @r"
    |  -  1: entry with no path parts|
    |  -  2: entry1|
    |  -  3: part1/part2/entry2|
    |  -  4:             entry3|
    |  -  5:             entry4|
    |  -  6:       part3/entry6 with some trailing text|
    |  -  7:       part4/entry7|
    |  -  8: part5/entry8|
    |  -  9:       part6/entry9|
    |  - 10: /part5/part7/entry10|
    |  - 11:        /part7/entry11|
    |  - 12:        part7/entry12|
    ");
}

#[test]
fn test_list_write_failure_propagates() {
    let mut sink = FailingWriter::new(10);
    let err = small_conf()
        .no_rpt_path_list(&mut sink, &sample_list(), 0)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BrokenPipe);
}
