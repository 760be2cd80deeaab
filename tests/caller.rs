//! Caller column: which function the stack walk lands on.
//!
//! The test profile is optimized, so log calls at the end of a function are
//! real tail-call candidates here.

use taglog::caller::{CALLER_DEPTH, UNKNOWN_CALLER, shorten};
use taglog::options::sink;
use taglog::{Logger, MemorySink};

fn capture() -> (Logger, MemorySink) {
    let out = MemorySink::new();
    (Logger::with_options("c", [sink(out.clone())]), out)
}

/// The `[caller]` segment of a single captured line.
fn caller_of(out: &MemorySink) -> String {
    let line = out.lines().pop().expect("one line");
    let after_tag = &line[line.find("\x1b[0m] [").expect("tag segment") + 7..];
    after_tag[..after_tag.find("] ").expect("caller segment")].to_string()
}

#[inline(never)]
fn helper(logger: &Logger) {
    taglog::info!(logger, "from helper");
}

#[inline(never)]
fn ends_with_template_call(logger: &Logger, n: u32) {
    let doubled = n * 2;
    taglog::warnf!(logger, "doubled {doubled}");
}

#[inline(never)]
fn ends_with_operand_call(logger: &Logger) {
    taglog::error!(logger, "last ", 1);
}

#[inline(never)]
fn parent_of_tail_callers(logger: &Logger) {
    ends_with_template_call(logger, 21);
    ends_with_operand_call(logger);
}

trait Job {
    fn run(&self, logger: &Logger);
}

struct Worker;

impl Job for Worker {
    #[inline(never)]
    fn run(&self, logger: &Logger) {
        taglog::warnf!(logger, "running");
    }
}

struct Server;

impl Server {
    #[inline(never)]
    fn start(&self, logger: &Logger) {
        taglog::error!(logger, "starting");
    }
}

#[test]
fn depth_constant() {
    assert_eq!(CALLER_DEPTH, 3);
    assert_eq!(UNKNOWN_CALLER, "unknown caller");
}

#[test]
fn names_the_test_function() {
    let (logger, out) = capture();
    logger.info(&[&"direct"]);
    let caller = caller_of(&out);
    assert!(caller.ends_with("names_the_test_function"), "{caller}");
    assert!(!caller.contains("Logger"), "{caller}");
}

#[test]
fn names_the_immediate_caller_not_its_parent() {
    let (logger, out) = capture();
    helper(&logger);
    let caller = caller_of(&out);
    assert!(caller.ends_with("helper"), "{caller}");
}

#[test]
fn log_call_ending_a_function_names_that_function() {
    let (logger, out) = capture();
    parent_of_tail_callers(&logger);

    let lines = out.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("ends_with_template_call] doubled 42"), "{}", lines[0]);
    assert!(lines[1].contains("ends_with_operand_call] last 1"), "{}", lines[1]);
}

#[test]
fn every_entry_point_has_the_same_depth() {
    let (logger, out) = capture();
    logger.info(&[&"a"]);
    logger.infof(format_args!("b"));
    logger.warn(&[&"c"]);
    logger.warnf(format_args!("d"));
    logger.error(&[&"e"]);
    logger.errorf(format_args!("f"));
    logger.log(taglog::Level::Info, format_args!("g"));
    taglog::info!(logger, "h");
    taglog::errorf!(logger, "i");

    for line in out.lines() {
        assert!(
            line.contains("every_entry_point_has_the_same_depth] "),
            "{line}"
        );
    }
}

#[test]
fn trait_methods_are_shortened_to_receiver_and_method() {
    let (logger, out) = capture();
    Worker.run(&logger);
    let caller = caller_of(&out);
    assert!(caller.starts_with('<'), "{caller}");
    assert!(caller.contains("Worker as "), "{caller}");
    assert!(caller.ends_with(">::run"), "{caller}");
}

#[test]
fn inherent_methods_keep_the_full_path() {
    let (logger, out) = capture();
    Server.start(&logger);
    let caller = caller_of(&out);
    assert!(caller.ends_with("Server::start"), "{caller}");
    assert!(caller.contains("::Server"), "{caller}");
}

#[test]
fn closures_are_named_after_their_parent() {
    let (logger, out) = capture();
    let log_it = || taglog::info!(logger, "closure");
    log_it();
    let caller = caller_of(&out);
    assert!(caller.contains("closures_are_named_after_their_parent"), "{caller}");
}

#[test]
fn shorten_matches_only_receiver_names() {
    assert_eq!(shorten("svc::main"), "svc::main");
    assert_eq!(
        shorten("<svc::Db as svc::Store>::get"),
        "<svc::Db as svc::Store>::get"
    );
    assert_eq!(
        shorten("svc::<impl svc::Db>::get"),
        "<impl svc::Db>::get"
    );
}
