use clap::Args;
use jiff::Timestamp;

use crate::cli::GuestTokenArgs;

#[derive(Debug, Args)]
pub(crate) struct InspectTokenArgs {
    #[command(flatten)]
    guest_token: GuestTokenArgs,

    /// Signed guest token
    token: String,
}

pub(crate) fn run(args: &InspectTokenArgs) -> Result<(), String> {
    let codec = args.guest_token.settings()?.codec();

    let claims = codec
        .decode(&args.token)
        .map_err(|error| format!("guest token rejected: {error}"))?;

    println!("username: {}", claims.user.username);
    println!("audience: {}", claims.aud);
    if let Ok(expires_at) = Timestamp::from_second(claims.exp) {
        println!("expires_at: {expires_at}");
    }
    for resource in &claims.resources {
        println!("grant: {} {}", resource.kind, resource.id);
    }

    Ok(())
}
