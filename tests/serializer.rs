//! Serializer output and round trips over the samples

use tinker_notes::notes::testing::Samples;
use tinker_notes::notes::{
    parse_contextual, parse_flat, serialize_contexts, serialize_notes, write_contexts, Context,
    Document, Note, ParseMode,
};

#[test]
fn contextual_sample_is_canonicalized() {
    let contexts = Samples::contextual(1).parse_contextual();
    insta::assert_snapshot!(serialize_contexts(&contexts).trim_end(), @r###"
    n  a note before any header

    [work]
    n  finish the report
        n  draft
        n  review

    [empty]

    [home]
    n  water the plants
    "###);
}

#[test]
fn contextual_output_ends_every_context_with_blank_line() {
    let contexts = Samples::contextual(1).parse_contextual();
    assert!(serialize_contexts(&contexts).ends_with("n  water the plants\n\n"));
}

#[test]
fn flat_sample_is_canonicalized() {
    let notes = Samples::flat(1).parse_flat();
    insta::assert_snapshot!(serialize_notes(&notes), @r###"
    .  tinker notes
        n  one note per line
            _  an underscore stands for "no type"
        n  four spaces per indentation level
        n  a tab counts as four spaces
    .  blank lines are cosmetic in flat documents
    "###);
}

#[test]
fn keys_are_zero_padded() {
    let notes = vec![Note::new("n", "x").with_keys("1", "23")];
    assert_eq!(serialize_notes(&notes), "00001:00023: n  x\n");
}

#[test]
fn empty_type_token_is_written_as_underscore() {
    assert_eq!(serialize_notes(&[Note::new("", "x")]), "_  x\n");
}

#[test]
fn samples_without_verbatim_round_trip() {
    for sample in Samples::all() {
        if sample.source().contains("{{{") {
            continue;
        }
        let doc = sample.parse();
        let text = doc.to_outline();
        let reparsed = Document::parse(&text, doc.mode()).unwrap();
        assert_eq!(reparsed, doc, "{}", sample.name());
    }
}

#[test]
fn serialization_is_idempotent() {
    for sample in Samples::all() {
        // Verbatim content is written without its markers and cannot be reparsed
        if sample.source().contains("{{{") {
            continue;
        }
        let once = sample.parse().to_outline();
        let twice = Document::parse(&once, sample.kind().mode())
            .unwrap()
            .to_outline();
        assert_eq!(twice, once, "{}", sample.name());
    }
}

#[test]
fn empty_untitled_context_survives_round_trip() {
    let contexts = vec![
        Context::untitled(),
        Context::new("a").with_note(Note::new("n", "x")),
    ];
    let text = serialize_contexts(&contexts);
    assert_eq!(text, "[]\n\n[a]\nn  x\n\n");
    assert_eq!(parse_contextual(&text).unwrap(), contexts);
}

#[test]
fn qualifier_without_description_round_trips() {
    let notes = vec![Note::new("n", "").with_qualifier("later")];
    let text = serialize_notes(&notes);
    assert_eq!(text, "n [later]  \n");
    assert_eq!(parse_flat(&text).unwrap(), notes);
}

#[test]
fn writer_output_matches_string_output() {
    let contexts = Samples::contextual(1).parse_contextual();
    let mut buffer = Vec::new();
    write_contexts(&contexts, &mut buffer).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), serialize_contexts(&contexts));
}

#[test]
fn flattened_document_serializes_as_flat_outline() {
    let doc = Samples::contextual(1).parse().into_flat();
    assert_eq!(doc.mode(), ParseMode::Flat);
    assert_eq!(
        doc.to_outline(),
        concat!(
            ".  \n",
            "    n  a note before any header\n",
            ".  work\n",
            "    n  finish the report\n",
            "        n  draft\n",
            "        n  review\n",
            ".  empty\n",
            ".  home\n",
            "    n  water the plants\n",
        )
    );
}
