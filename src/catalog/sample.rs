use crate::common::{Category, Reference, ReferenceType};

/// The three demonstration references shipped with the tool
pub fn sample_references() -> Vec<Reference> {
    vec![
        Reference {
            id: "1".to_string(),
            title: "Intelligence artificielle et apprentissage automatique : Une approche moderne"
                .to_string(),
            authors: vec![
                "Dr. Marie Dubois".to_string(),
                "Prof. Jean Martin".to_string(),
                "Dr. Sophie Laurent".to_string(),
            ],
            venue: "Revue Française d'Intelligence Artificielle".to_string(),
            year: 2024,
            category: Category::Technology,
            reference_type: ReferenceType::Article,
            abstract_text: "Cette étude présente une analyse approfondie des dernières avancées en \
                intelligence artificielle et apprentissage automatique. Les auteurs explorent les \
                nouvelles architectures de réseaux de neurones, les techniques d'optimisation \
                avancées et leurs applications pratiques dans divers domaines industriels. \
                L'article propose également un framework méthodologique pour l'évaluation des \
                performances des modèles d'IA."
                .to_string(),
            url: Some("https://example.com/article1".to_string()),
            doi: Some("10.1000/journal.2024.001".to_string()),
            citations: 145,
            relevance_score: 95,
        },
        Reference {
            id: "2".to_string(),
            title: "Blockchain et cryptomonnaies : Impact sur les systèmes financiers traditionnels"
                .to_string(),
            authors: vec![
                "Prof. Alexandre Chen".to_string(),
                "Dr. Fatima Al-Rashid".to_string(),
            ],
            venue: "Journal of Financial Technology".to_string(),
            year: 2023,
            category: Category::Finance,
            reference_type: ReferenceType::Report,
            abstract_text: "Cette recherche examine l'impact disruptif de la technologie blockchain \
                sur les institutions financières traditionnelles. L'étude analyse les mécanismes \
                de consensus, la sécurité cryptographique et les implications réglementaires. Les \
                résultats montrent une transformation significative du paysage financier avec \
                l'adoption croissante des actifs numériques."
                .to_string(),
            url: Some("https://example.com/article2".to_string()),
            doi: Some("10.1000/fintech.2023.456".to_string()),
            citations: 87,
            relevance_score: 78,
        },
        Reference {
            id: "3".to_string(),
            title: "Développement durable et technologies vertes : Solutions pour l'avenir"
                .to_string(),
            authors: vec![
                "Dr. Elena Rodriguez".to_string(),
                "Prof. Hans Mueller".to_string(),
                "Dr. Aisha Patel".to_string(),
                "Prof. Liu Wei".to_string(),
            ],
            venue: "Environmental Science & Technology".to_string(),
            year: 2024,
            category: Category::Environment,
            reference_type: ReferenceType::CaseStudy,
            abstract_text: "Cette étude multidisciplinaire explore les innovations technologiques \
                au service du développement durable. Les chercheurs analysent les énergies \
                renouvelables, les matériaux biosourcés et les processus de recyclage avancés. \
                L'article propose un modèle intégré pour l'évaluation de l'impact environnemental \
                des nouvelles technologies."
                .to_string(),
            url: Some("https://example.com/article3".to_string()),
            doi: None,
            citations: 203,
            relevance_score: 89,
        },
    ]
}
