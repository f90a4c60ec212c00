#![no_main]

use libfuzzer_sys::fuzz_target;

use ugraph::{
    infra::testing::check_consistency,
    load::{LoadConfig, Loader},
};

fuzz_target!(|input: &str| {
    for config in [LoadConfig::default(), LoadConfig::default().weighted()] {
        let loader = Loader::new(config.max_order(256));

        // Any input either fails cleanly or yields a consistent graph.
        if let Ok(graph) = loader.load_str(input) {
            check_consistency(&graph)
                .as_ref()
                .map_err(ToString::to_string)
                .unwrap();
        }
    }
});
