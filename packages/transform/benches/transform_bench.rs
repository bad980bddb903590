use criterion::{black_box, criterion_group, criterion_main, Criterion};
use otcheck_transform::{parse_commands, transform, Command};

const REPL_DOC: &str =
    "Repl.it uses operational transformations to keep everyone in a multiplayer repl in sync.";

fn transform_short_sequence(c: &mut Criterion) {
    let commands = vec![
        Command::delete(7),
        Command::insert("We"),
        Command::skip(4),
        Command::delete(1),
    ];

    c.bench_function("transform_short_sequence", |b| {
        b.iter(|| transform(black_box(REPL_DOC), black_box(&commands)))
    });
}

fn transform_long_document(c: &mut Criterion) {
    let document = REPL_DOC.repeat(200);

    // Walk the whole document, rewriting one char every 10
    let mut commands = Vec::new();
    for _ in 0..(document.chars().count() / 10 - 1) {
        commands.push(Command::skip(9));
        commands.push(Command::delete(1));
        commands.push(Command::insert("_"));
    }

    c.bench_function("transform_long_document", |b| {
        b.iter(|| transform(black_box(&document), black_box(&commands)))
    });
}

fn parse_command_list(c: &mut Criterion) {
    let json = format!(
        "[{}]",
        vec![r#"{"op": "skip", "count": 4},{"op": "insert", "chars": " day"},{"op": "delete", "count": 1}"#; 100]
            .join(",")
    );

    c.bench_function("parse_command_list", |b| {
        b.iter(|| parse_commands(black_box(&json)))
    });
}

criterion_group!(
    benches,
    transform_short_sequence,
    transform_long_document,
    parse_command_list
);
criterion_main!(benches);
