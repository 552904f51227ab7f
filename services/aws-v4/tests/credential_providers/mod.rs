
use presign_core::{Context, StaticEnv};
use std::collections::HashMap;

pub fn static_context(envs: &[(&str, &str)]) -> Context {
    let _ = env_logger::builder().is_test(true).try_init();

    Context::new().with_env(StaticEnv {
        envs: envs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>(),
    })
}
