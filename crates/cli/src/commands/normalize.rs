use favicon_domain::normalize_host;

pub fn run_normalize(labels: &[String]) {
    for label in labels {
        match normalize_host(label) {
            Some(host) => println!("{label}\t{host}"),
            None => println!("{label}\t-"),
        }
    }
}
