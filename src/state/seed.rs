//! Sample data loaded into an empty store at startup

use crate::error::Result;
use crate::models::*;
use crate::state::{ResearchStore, TopicFilter};
use chrono::{Duration, NaiveDate, Utc};

/// Load the sample data set unless the store already holds topics.
///
/// Returns `true` when data was written.
pub async fn seed_store(store: &dyn ResearchStore) -> Result<bool> {
    if store.count_topics(&TopicFilter::default()).await? > 0 {
        tracing::debug!("Store already seeded, skipping sample data");
        return Ok(false);
    }

    let now = Utc::now();
    let days_ago = |days: i64| now - Duration::days(days);

    // Topics
    let topic = |name: &str, description: &str, status, owner: &str, category, tags: &[&str], created: i64, updated: i64| {
        let mut topic = Topic::new(NewTopic {
            name: name.to_string(),
            description: Some(description.to_string()),
            status,
            owner: Some(owner.to_string()),
            category: Some(category),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        });
        topic.created_at = days_ago(created);
        topic.updated_at = days_ago(updated);
        topic
    };

    let t1 = store
        .insert_topic(topic(
            "AI Adoption in Enterprise",
            "Tracking how large organisations adopt and integrate AI tools across their workflows.",
            TopicStatus::Active,
            "alice@example.com",
            TopicCategory::Market,
            &["AI", "enterprise", "SaaS"],
            30,
            5,
        ))
        .await?;
    let t2 = store
        .insert_topic(topic(
            "Quantum Computing Landscape",
            "Technical and commercial developments in quantum hardware and software.",
            TopicStatus::Active,
            "bob@example.com",
            TopicCategory::Technical,
            &["quantum", "hardware", "deep-tech"],
            60,
            2,
        ))
        .await?;
    let t3 = store
        .insert_topic(topic(
            "Competitive Analysis: CRM Market",
            "Deep-dive on major CRM vendors and emerging challengers.",
            TopicStatus::Paused,
            "carol@example.com",
            TopicCategory::Competitive,
            &["CRM", "SaaS", "competitors"],
            90,
            20,
        ))
        .await?;
    let t4 = store
        .insert_topic(topic(
            "Climate Tech Investment Trends",
            "Following capital flows, policy changes, and innovation in climate technology.",
            TopicStatus::Completed,
            "alice@example.com",
            TopicCategory::Industry,
            &["climate", "investment", "ESG"],
            120,
            10,
        ))
        .await?;

    // Sources
    struct SourceSeed<'a> {
        topic_id: Option<i64>,
        title: &'a str,
        slug: &'a str,
        source_type: SourceType,
        author: &'a str,
        publication: &'a str,
        published: (i32, u32, u32),
        summary: Option<&'a str>,
        key_findings: &'a [&'a str],
        credibility: Level,
        added_by: &'a str,
        age_days: i64,
    }

    let source_seeds = [
        SourceSeed {
            topic_id: Some(t1.id),
            title: "The State of AI in 2024: McKinsey Global Survey",
            slug: "mckinsey-ai-2024",
            source_type: SourceType::Report,
            author: "McKinsey & Company",
            publication: "McKinsey Insights",
            published: (2024, 3, 15),
            summary: Some("McKinsey's annual survey of 1,400+ executives reveals AI adoption has doubled in two years, with 65% of organisations now regularly using generative AI."),
            key_findings: &[
                "65% of orgs use gen-AI in at least one business function",
                "Cost reduction and revenue growth are top motivators",
                "Talent and data readiness remain the biggest blockers",
            ],
            credibility: Level::High,
            added_by: "alice@example.com",
            age_days: 25,
        },
        SourceSeed {
            topic_id: Some(t1.id),
            title: "Gartner Hype Cycle for Artificial Intelligence 2024",
            slug: "gartner-hype-cycle-ai-2024",
            source_type: SourceType::Report,
            author: "Gartner Research",
            publication: "Gartner",
            published: (2024, 7, 1),
            summary: Some("Gartner positions generative AI at the Peak of Inflated Expectations with autonomous agents emerging rapidly."),
            key_findings: &[
                "Gen-AI at Peak of Inflated Expectations",
                "Agentic AI emerging as next major wave",
                "Multimodal models moving toward Slope of Enlightenment",
            ],
            credibility: Level::High,
            added_by: "bob@example.com",
            age_days: 20,
        },
        SourceSeed {
            topic_id: Some(t2.id),
            title: "IBM Quantum System Two Unveiled",
            slug: "ibm-quantum-system-two",
            source_type: SourceType::Article,
            author: "IBM Research Team",
            publication: "IBM Research Blog",
            published: (2023, 12, 4),
            summary: Some("IBM announces its 133-qubit Heron processor and modular Quantum System Two architecture, targeting utility-scale quantum computation."),
            key_findings: &[
                "133-qubit Heron processor with improved error rates",
                "Modular architecture allows multi-system entanglement",
                "First utility-scale demonstrations achieved",
            ],
            credibility: Level::High,
            added_by: "bob@example.com",
            age_days: 55,
        },
        SourceSeed {
            topic_id: Some(t3.id),
            title: "Salesforce vs HubSpot: 2024 CRM Competitive Teardown",
            slug: "crm-competitive-teardown-2024",
            source_type: SourceType::Article,
            author: "Tech Analyst Weekly",
            publication: "Tech Analyst Weekly",
            published: (2024, 2, 20),
            summary: None,
            key_findings: &[],
            credibility: Level::Medium,
            added_by: "carol@example.com",
            age_days: 15,
        },
        SourceSeed {
            topic_id: Some(t4.id),
            title: "BloombergNEF Clean Energy Investment Report 2023",
            slug: "bnef-clean-energy-2023",
            source_type: SourceType::Report,
            author: "BloombergNEF",
            publication: "BloombergNEF",
            published: (2024, 1, 30),
            summary: Some("Global clean energy investment hit $1.8 trillion in 2023, surpassing fossil fuel investment for the first time."),
            key_findings: &[
                "$1.8T clean energy investment in 2023",
                "Solar alone attracted $380B",
                "EV investment exceeded $600B globally",
            ],
            credibility: Level::High,
            added_by: "alice@example.com",
            age_days: 80,
        },
        SourceSeed {
            topic_id: None,
            title: "Nature: Large Language Models Survey",
            slug: "nature-llm-survey",
            source_type: SourceType::Paper,
            author: "Wei et al.",
            publication: "Nature Machine Intelligence",
            published: (2024, 4, 10),
            summary: None,
            key_findings: &[],
            credibility: Level::High,
            added_by: "bob@example.com",
            age_days: 10,
        },
    ];

    let mut sources = Vec::with_capacity(source_seeds.len());
    for seed in source_seeds {
        let (year, month, day) = seed.published;
        let mut source = Source::new(NewSource {
            topic_id: seed.topic_id,
            title: seed.title.to_string(),
            url: Some(format!("https://example.com/{}", seed.slug)),
            source_type: Some(seed.source_type),
            author: Some(seed.author.to_string()),
            publication: Some(seed.publication.to_string()),
            published_date: NaiveDate::from_ymd_opt(year, month, day),
            summary: seed.summary.map(str::to_string),
            key_findings: seed.key_findings.iter().map(|f| f.to_string()).collect(),
            credibility: seed.credibility,
            added_by: Some(seed.added_by.to_string()),
        });
        source.created_at = days_ago(seed.age_days);
        source.updated_at = source.created_at;
        sources.push(store.insert_source(source).await?);
    }

    // Notes
    let note_seeds = [
        (
            Some(t1.id),
            Some(sources[0].id),
            "The McKinsey report underscores that AI adoption is no longer optional for enterprise competitiveness. Key action: evaluate our clients' gen-AI readiness.",
            "alice@example.com",
            &["action-item", "enterprise-AI"][..],
            24,
        ),
        (
            Some(t2.id),
            Some(sources[2].id),
            "IBM's modular approach could allow incremental capacity upgrades rather than full hardware replacement cycles, an interesting business model implication.",
            "bob@example.com",
            &["hardware", "business-model"][..],
            50,
        ),
        (
            Some(t1.id),
            None,
            "Cross-cutting observation: organisations that invest in AI literacy programs see 2x faster adoption rates. Need a source to back this up.",
            "carol@example.com",
            &["AI-literacy", "needs-source"][..],
            8,
        ),
    ];

    for (topic_id, source_id, content, author, tags, age_days) in note_seeds {
        let mut note = Note::new(NewNote {
            topic_id,
            source_id,
            content: content.to_string(),
            author: Some(author.to_string()),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        });
        note.created_at = days_ago(age_days);
        note.updated_at = note.created_at;
        store.insert_note(note).await?;
    }

    // Insights
    let insight_seeds = [
        (
            t1.id,
            "Enterprises with dedicated AI CoE adopt 3x faster",
            "Organisations that establish a Centre of Excellence for AI see significantly faster roll-out across business units, backed by governance frameworks.",
            &[
                "McKinsey 2024: top quartile adopters have centralised AI teams",
                "Gartner 2024: governance cited as key differentiator",
            ][..],
            (Level::High, Level::High, InsightStatus::Validated),
            "alice@example.com",
            18,
        ),
        (
            t1.id,
            "Data quality is the hidden bottleneck for gen-AI ROI",
            "Despite tooling maturity, most enterprise gen-AI projects fail to deliver ROI within 12 months due to poor data pipelines and inconsistent labelling.",
            &[
                "McKinsey survey: data readiness top blocker (cited by 42%)",
                "Internal client interviews Q1 2024",
            ][..],
            (Level::Medium, Level::High, InsightStatus::Actionable),
            "alice@example.com",
            12,
        ),
        (
            t2.id,
            "Quantum advantage in optimisation will precede ML applications",
            "Near-term practical quantum advantage is more likely in combinatorial optimisation (logistics, finance) than in ML training tasks.",
            &[
                "IBM Heron demonstration results",
                "Google DeepMind quantum chemistry benchmarks",
            ][..],
            (Level::Medium, Level::Medium, InsightStatus::Hypothesis),
            "bob@example.com",
            45,
        ),
        (
            t4.id,
            "Solar + storage capex parity with gas peakers by 2026",
            "Cost trajectories from BNEF and Lazard suggest solar+storage will match gas peaker plant total cost of ownership in most US markets by 2026.",
            &[
                "BNEF Clean Energy 2023: solar LCOE down 90% in a decade",
                "Lazard LCOE 2023 report",
            ][..],
            (Level::High, Level::High, InsightStatus::Actionable),
            "alice@example.com",
            75,
        ),
    ];

    for (topic_id, title, content, evidence, (confidence, impact, status), author, age_days) in insight_seeds {
        let mut insight = Insight::new(NewInsight {
            topic_id,
            title: title.to_string(),
            content: Some(content.to_string()),
            evidence: evidence.iter().map(|e| e.to_string()).collect(),
            confidence,
            impact,
            status,
            author: Some(author.to_string()),
        });
        insight.created_at = days_ago(age_days);
        insight.updated_at = insight.created_at;
        store.insert_insight(insight).await?;
    }

    // Collections
    let collection_seeds = [
        (
            "AI Enterprise Starter Pack",
            "Curated sources and topics for onboarding clients to enterprise AI strategy.",
            vec![t1.id],
            vec![sources[0].id, sources[1].id],
            "alice@example.com",
            true,
            14,
        ),
        (
            "Deep Tech Watch",
            "Long-horizon bets: quantum computing and advanced materials.",
            vec![t2.id],
            vec![sources[2].id],
            "bob@example.com",
            false,
            40,
        ),
    ];

    for (name, description, topic_ids, source_ids, created_by, shared, age_days) in collection_seeds {
        let mut collection = Collection::new(NewCollection {
            name: name.to_string(),
            description: Some(description.to_string()),
            topic_ids,
            source_ids,
            created_by: Some(created_by.to_string()),
            shared,
        });
        collection.created_at = days_ago(age_days);
        collection.updated_at = collection.created_at;
        store.insert_collection(collection).await?;
    }

    tracing::info!(
        topics = 4,
        sources = sources.len(),
        "Seeded store with sample research data"
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{InMemoryStore, InsightFilter, SourceFilter};

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let store = InMemoryStore::new();

        assert!(seed_store(&store).await.unwrap());
        assert!(!seed_store(&store).await.unwrap());

        assert_eq!(store.count_topics(&TopicFilter::default()).await.unwrap(), 4);
        assert_eq!(store.count_sources(&SourceFilter::default()).await.unwrap(), 6);
        assert_eq!(store.count_insights(&InsightFilter::default()).await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_seed_contains_unreviewed_sources() {
        let store = InMemoryStore::new();
        seed_store(&store).await.unwrap();

        let unreviewed = store.count_sources(&SourceFilter::unreviewed()).await.unwrap();
        assert_eq!(unreviewed, 2);
        assert_eq!(store.count_topics(&TopicFilter::active()).await.unwrap(), 2);
    }
}
