fn main() {
    println!("cargo::rustc-check-cfg=cfg(tracing_pretty)");
    println!("cargo::rerun-if-env-changed=MAILER_LOG_PRETTY");
    if matches!(
        std::env::var("MAILER_LOG_PRETTY").as_deref(),
        Ok("1" | "true")
    ) {
        println!("cargo::rustc-cfg=tracing_pretty");
    }
}
