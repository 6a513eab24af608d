use birdcage::types::TweetKind;
use birdcage::{ClientOptions, Credentials, TwitterClient, UserRef, UserTweetsArgs};
use clap::Parser;
use miette::IntoDiagnostic;
use smol_str::SmolStr;

#[derive(Parser, Debug)]
#[command(author, version, about = "birdcage - Twitter/X web API client demo")]
struct Args {
    /// Handle to read tweets from, without the @
    username: SmolStr,

    /// Value of the `auth_token` cookie of a logged-in browser
    #[arg(long)]
    auth_token: SmolStr,

    /// Value of the `ct0` cookie of the same browser
    #[arg(long)]
    csrf: SmolStr,

    /// Site domain (twitter.com or x.com)
    #[arg(long, default_value = "x.com")]
    domain: SmolStr,

    /// Number of tweets to print
    #[arg(short, long, default_value_t = 5)]
    limit: usize,

    /// Log every request
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let args = Args::parse();

    let options = ClientOptions::new()
        .domain(args.domain)
        .verbose(args.verbose)
        .build();
    let client = TwitterClient::connect(Credentials::new(args.auth_token, args.csrf), options).await?;

    match client.self_user().await {
        Some(me) => println!("logged in as @{} ({})", me.username, me.id),
        None => println!("logged in, account lookup failed"),
    }

    // Look up the target account
    let user = client
        .user(UserRef::username(args.username.clone()))
        .await
        .into_result()?;
    let Some(user) = user.as_user() else {
        println!("@{} is not available", args.username);
        return Ok(());
    };
    println!("\n@{} ({}), {} followers", user.username, user.name, user.followers_count);

    // Fetch their latest tweets
    println!("\nfetching tweets...");
    let page = client
        .user_tweets_slice(&user.id, UserTweetsArgs::default())
        .await
        .into_result()?;

    let tweets: Vec<_> = page
        .items()
        .filter_map(TweetKind::as_tweet)
        .take(args.limit)
        .collect();
    println!("\ntweets ({}):", tweets.len());
    for (i, tweet) in tweets.iter().enumerate() {
        println!("\n{}. {} at {}", i + 1, tweet.id, tweet.created_at);
        println!("   {}", serde_json::to_string_pretty(&tweet.text).into_diagnostic()?);
    }

    Ok(())
}
