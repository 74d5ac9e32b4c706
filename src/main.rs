use clap::{Parser, Subcommand};
use tracing::{error, warn};

use review_hub::app::ingest_use_case::{IngestExternalReviews, IngestOutcome};
use review_hub::app::ports::{IdentityPort, ReviewSourcePort};
use review_hub::app::submit_use_case::SubmitReview;
use review_hub::app::suggest_title_use_case::SuggestTitle;
use review_hub::common::constants::{FIXTURE_SOURCE, GOOGLE_BUSINESS_SOURCE, RATING_MAX};
use review_hub::config::Config;
use review_hub::domain::{Review, SortOrder, UserProfile};
use review_hub::infra::identity::StaticIdentityProvider;
use review_hub::infra::title_suggester::OpenAiTitleSuggester;
use review_hub::observability;
use review_hub::pipeline::processing::validate::{
    SubmissionInput, SubmissionValidator, ValidationError,
};
use review_hub::pipeline::storage::in_memory::ReviewFeed;
use review_hub::sources::{FixtureSource, GoogleBusinessSource};

#[derive(Parser)]
#[command(name = "review_hub")]
#[command(about = "Customer review widget backend: fetch, submit, and browse reviews")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch externally sourced reviews and print the resulting feed
    Fetch {
        /// Sort order: newest, oldest, highest, lowest
        #[arg(long, default_value = "newest")]
        sort: String,
        /// Only show reviews with this exact star rating (1-5)
        #[arg(long)]
        rating: Option<u8>,
        /// Use the bundled fixture batch instead of the live endpoint
        #[arg(long)]
        fixture: bool,
    },
    /// Submit one locally authored review
    Submit {
        /// Star rating from 1 to 5
        #[arg(long)]
        rating: u8,
        /// Review title
        #[arg(long)]
        title: String,
        /// Review body
        #[arg(long)]
        content: String,
    },
    /// Generate a review title from drafted content
    SuggestTitle {
        /// The drafted review body
        #[arg(long)]
        content: String,
    },
    /// Run a full session: ingest fixtures, submit samples, print views
    Demo,
}

fn serve_view(feed: &ReviewFeed, rating: Option<u8>, sort: SortOrder) -> Vec<Review> {
    let view = feed.view(rating, sort);
    observability::metrics::feed::view_served();
    view
}

fn print_reviews(reviews: &[Review]) {
    if reviews.is_empty() {
        println!("   (no reviews to show)");
        return;
    }
    for review in reviews {
        let author = review.author.name.as_deref().unwrap_or("Anonymous");
        let stars = if review.rating == 0 {
            "unrated".to_string()
        } else {
            "\u{2605}".repeat(review.rating as usize)
        };
        let title = if review.title.is_empty() {
            "(untitled)"
        } else {
            review.title.as_str()
        };
        println!(
            "   [{}] {} by {} on {}",
            stars,
            title,
            author,
            review.created_at.format("%Y-%m-%d")
        );
        println!("       {}", review.content);
    }
}

fn print_issues(err: &ValidationError) {
    for issue in &err.issues {
        println!("   - {:?}: {}", issue.field, issue.message);
    }
}

/// Parse the sort token, falling back to newest on unrecognized input
fn resolve_sort(sort: &str) -> SortOrder {
    match SortOrder::parse(sort) {
        Some(order) => order,
        None => {
            warn!("Unknown sort order specified");
            println!("⚠️  Unknown sort order '{}', falling back to newest", sort);
            SortOrder::Newest
        }
    }
}

/// Drop rating filters outside 1..=5 rather than serving an empty view
fn resolve_rating_filter(rating: Option<u8>) -> Option<u8> {
    match rating {
        Some(r) if (1..=RATING_MAX).contains(&r) => Some(r),
        Some(r) => {
            println!("⚠️  Rating filter {} is outside 1-{}, ignoring it", r, RATING_MAX);
            None
        }
        None => None,
    }
}

async fn run_ingest(
    source: Box<dyn ReviewSourcePort>,
    source_id: &str,
    business_profile_id: &str,
    feed: &ReviewFeed,
) {
    let ingest = IngestExternalReviews::with_default_normalizer(source, source_id);
    match ingest.run(business_profile_id, feed).await {
        IngestOutcome::Loaded { count } => {
            println!("✅ Loaded {} external reviews", count);
        }
        IngestOutcome::SourceUnavailable => {
            println!("⚠️  External review source unavailable, continuing with local reviews only");
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Initialize logging and metrics
    observability::init_logging();
    if let Err(e) = observability::init() {
        warn!("Metrics system failed to initialize: {}", e);
    }
    observability::heartbeat();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Fetch { sort, rating, fixture } => {
            println!("🔄 Fetching external reviews...");

            let feed = ReviewFeed::new();
            let (source, source_id): (Box<dyn ReviewSourcePort>, &str) = if fixture {
                (Box::new(FixtureSource), FIXTURE_SOURCE)
            } else {
                (
                    Box::new(GoogleBusinessSource::from_config(&config.source)?),
                    GOOGLE_BUSINESS_SOURCE,
                )
            };
            run_ingest(source, source_id, &config.source.business_profile_id, &feed).await;

            let order = resolve_sort(&sort);
            let filter = resolve_rating_filter(rating);
            println!("\n📋 Review feed ({} total):", feed.len());
            print_reviews(&serve_view(&feed, filter, order));
        }
        Commands::Submit { rating, title, content } => {
            let identity = StaticIdentityProvider::from_config(config.user.clone());
            let user = match identity.current_user() {
                Some(user) => user,
                None => {
                    println!("🔒 Sign in required: add a [user] section to config.toml");
                    return Ok(());
                }
            };

            let feed = ReviewFeed::new();
            let submit = SubmitReview::with_validator(SubmissionValidator::with_config(
                config.submission.validation(),
            ));

            match submit.submit(&user, SubmissionInput { rating, title, content }, &feed) {
                Ok(review) => {
                    println!("✅ Review {} submitted", review.id);
                    print_reviews(&serve_view(&feed, None, SortOrder::Newest));
                }
                Err(err) => {
                    println!("❌ Submission rejected:");
                    print_issues(&err);
                }
            }
        }
        Commands::SuggestTitle { content } => {
            let api_key = match std::env::var("OPENAI_API_KEY") {
                Ok(key) => key,
                Err(_) => {
                    println!("⚠️  OPENAI_API_KEY is not set, cannot reach the title model");
                    return Ok(());
                }
            };

            let suggester = OpenAiTitleSuggester::new(&config.ai, api_key);
            let use_case =
                SuggestTitle::with_config(Box::new(suggester), config.submission.validation());

            println!("🪄 Generating a title...");
            match use_case.run(&content).await {
                Ok(title) => println!("✅ Suggested title: {}", title),
                Err(err) => {
                    println!("❌ Could not suggest a title:");
                    print_issues(&err);
                }
            }
        }
        Commands::Demo => {
            println!("🚀 Running full review session demo...\n");
            let feed = ReviewFeed::new();

            println!("📥 Step 1: Ingesting external reviews from fixtures...");
            run_ingest(
                Box::new(FixtureSource),
                FIXTURE_SOURCE,
                "demo-business",
                &feed,
            )
            .await;

            println!("\n✍️  Step 2: Submitting local reviews...");
            let identity = StaticIdentityProvider::from_config(config.user.clone());
            let user = identity.current_user().unwrap_or_else(|| UserProfile {
                name: Some("Demo User".to_string()),
                avatar: None,
                uid: "local-demo-user".to_string(),
            });
            let submit = SubmitReview::with_validator(SubmissionValidator::with_config(
                config.submission.validation(),
            ));

            let samples = [
                (5u8, "Exactly what we needed", "Walked in with a vague idea and walked out thrilled. Five stars without hesitation."),
                (2u8, "Left waiting too long", "The result was fine in the end but we sat around for nearly an hour past our slot."),
            ];
            for (rating, title, content) in samples {
                match submit.submit(
                    &user,
                    SubmissionInput {
                        rating,
                        title: title.to_string(),
                        content: content.to_string(),
                    },
                    &feed,
                ) {
                    Ok(review) => println!("✅ Submitted \"{}\" as review {}", title, review.id),
                    Err(err) => {
                        error!("Demo submission unexpectedly rejected");
                        print_issues(&err);
                    }
                }
            }

            // A rejected submission, to show the field-level issues
            println!("\n🚫 Step 3: Submitting an invalid review...");
            let rejected = submit.submit(
                &user,
                SubmissionInput {
                    rating: 0,
                    title: "no".to_string(),
                    content: "too short".to_string(),
                },
                &feed,
            );
            match rejected {
                Ok(_) => error!("Invalid demo submission was unexpectedly accepted"),
                Err(err) => {
                    println!("❌ Rejected as expected:");
                    print_issues(&err);
                }
            }

            println!("\n📋 Step 4: Browsing views...");
            println!("\nNewest first:");
            print_reviews(&serve_view(&feed, None, SortOrder::Newest));
            println!("\nHighest rated first:");
            print_reviews(&serve_view(&feed, None, SortOrder::Highest));
            println!("\nOnly five-star reviews:");
            print_reviews(&serve_view(&feed, Some(5), SortOrder::Newest));

            println!("\n✅ Session demo complete: {} reviews in the feed", feed.len());
        }
    }

    Ok(())
}
