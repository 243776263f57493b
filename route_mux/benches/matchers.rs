use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use route_mux::{
    hyper::Request,
    matcher::{HeaderRegexMatcher, PathMatcher, PathWithVarsMatcher, SchemeMatcher},
    state::State,
    Matchers,
};

fn request_state() -> State {
    let req = Request::get("https://example.com/users/42/posts")
        .header("accept", "application/json")
        .header("x-tenant", "acme")
        .body(())
        .unwrap();
    State::from_request(req)
}

// a route table of `n` routes, one of each matcher kind per route
fn route_table(n: usize) -> Matchers {
    let mut matchers = Matchers::new();
    for i in 0..n {
        matchers.push(SchemeMatcher::new(vec!["http", "https"]));
        matchers.push(PathMatcher::new(format!("/static/{}", i)));
        matchers.push(PathWithVarsMatcher::new(&format!("/users/:number/r{}", i)).unwrap());
        matchers.push(HeaderRegexMatcher::new(vec!["x-tenant", "[a-z]+"]).unwrap());
    }
    matchers
}

fn matching_benchmark(c: &mut Criterion) {
    let state = request_state();
    let template = PathWithVarsMatcher::new("/users/:number/:string").unwrap();
    let headers = HeaderRegexMatcher::new(vec!["accept", "application/(json|xml)"]).unwrap();
    let all: Matchers = route_table(1);

    let mut group = c.benchmark_group("match");
    group.bench_function("path_with_vars", |b| {
        b.iter(|| route_mux::Matcher::is_match(&template, &state))
    });
    group.bench_function("header_regex", |b| {
        b.iter(|| route_mux::Matcher::is_match(&headers, &state))
    });
    group.bench_function("collection", |b| b.iter(|| all.first_match(&state).is_some()));
    group.finish();
}

fn sorting_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    for routes in [10usize, 100, 1000].iter() {
        group.throughput(Throughput::Elements((*routes * 4) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(routes), routes, |b, &routes| {
            b.iter_with_large_drop(|| route_table(routes).sorted())
        });
    }
    group.finish();
}

criterion_group!(benches, matching_benchmark, sorting_benchmark);
criterion_main!(benches);
