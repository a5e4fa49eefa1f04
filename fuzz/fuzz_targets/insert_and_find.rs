#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<(String, String, i32)>, String, String)| {
    let mut router = segtree_router::Router::new();

    for (method, route, item) in data.0 {
        if router.add_route(method, &route, item).is_err() {
            return;
        }
    }

    let _ = router.find_route(&data.1, &data.2);
});
