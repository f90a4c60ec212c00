#![no_main]

use libfuzzer_sys::fuzz_target;

use ugraph::infra::{arbitrary::MutOpsSeq, modeling::Model, testing::check_consistency};

fuzz_target!(|seq: MutOpsSeq| {
    let mut graph = seq.graph();
    let mut model = Model::new(seq.order);

    for op in seq {
        assert_eq!(model.apply(op), op.apply(&mut graph));

        model
            .check(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
        check_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});
