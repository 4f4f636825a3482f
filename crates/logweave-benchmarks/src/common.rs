//! Common utilities for benchmarks

use criterion::Criterion;
use logweave_core::Node;
use pprof::criterion::{Output, PProfProfiler};

/// Configure criterion with flamegraph profiling support
pub fn criterion_config() -> Criterion {
    Criterion::default()
        .warm_up_time(std::time::Duration::from_secs(3))
        .measurement_time(std::time::Duration::from_secs(10))
        .sample_size(100)
        .with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)))
}

/// Build one configuration tree with `appenders` appenders and `loggers`
/// named loggers, each logger referencing one appender.
///
/// `tag` keeps element names of different trees apart so folds exercise
/// both the append and the replace paths.
pub fn synthetic_tree(tag: usize, appenders: usize, loggers: usize) -> Node {
    let mut appender_group = Node::new("Appenders");
    for i in 0..appenders {
        appender_group.push_child(
            Node::new("Console")
                .with_attr("name", format!("A{}", (tag + i) % (appenders * 2).max(1))),
        );
    }

    let mut logger_group = Node::new("Loggers").with_child(
        Node::new("Root")
            .with_attr("level", "INFO")
            .with_child(Node::new("AppenderRef").with_attr("ref", "A0")),
    );
    for i in 0..loggers {
        logger_group.push_child(
            Node::new("Logger")
                .with_attr("name", format!("com.example.m{}", (tag + i) % (loggers * 2).max(1)))
                .with_attr("level", "DEBUG")
                .with_child(
                    Node::new("AppenderRef").with_attr("ref", format!("A{}", i % appenders.max(1))),
                ),
        );
    }

    Node::new("Configuration")
        .with_attr("status", "WARN")
        .with_attr("monitorInterval", format!("{}", 30 + tag))
        .with_attr("packages", format!("com.example.p{}", tag))
        .with_child(Node::new("Properties").with_child(
            Node::new("Property").with_attr("name", format!("p{}", tag)),
        ))
        .with_child(appender_group)
        .with_child(logger_group)
}
