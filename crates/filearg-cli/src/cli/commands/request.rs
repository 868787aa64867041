//! Request command: finalize request arguments and show the result.

use anyhow::Result;
use filearg_core::args::{finalize_args, RequestArgs, StdinPrompt};

pub fn run_request(mut args: RequestArgs) -> Result<()> {
    let mut prompt = StdinPrompt;
    finalize_args(&mut args, 0, true, &mut prompt)?;

    for header in &args.headers {
        println!("header:     {}", header);
    }
    if let Some(userpwd) = &args.userpwd {
        println!("user:       {}", masked(userpwd));
    }
    if let Some(userpwd) = &args.proxyuserpwd {
        println!("proxy user: {}", masked(userpwd));
    }
    if let Some(agent) = &args.useragent {
        println!("user agent: {}", agent);
    }
    Ok(())
}

/// `user:secret` becomes `user:***`.
fn masked(userpwd: &str) -> String {
    match userpwd.split_once(':') {
        Some((user, _)) => format!("{}:***", user),
        None => userpwd.to_string(),
    }
}
