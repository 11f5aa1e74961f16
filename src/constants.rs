// Storage keys - these are the single source of truth for the persisted
// entities.  One bare JSON value per key, no envelope, no versioning.
pub const SESSION_KEY: &str = "gmb-agent-user";
pub const PROFILE_KEY: &str = "gmb-profile-data";
pub const CHAT_HISTORY_KEY: &str = "gmb-agent-chat-history";
pub const METRICS_KEY: &str = "gmb-metrics-data";
pub const GOOGLE_CONNECTED_KEY: &str = "gmb-connected";

/// Chat transcript entries older than this are dropped on load.
pub const RETENTION_DAYS: i64 = 30;

/// UI convention for the profile description length (grapheme count).
pub const DESCRIPTION_LIMIT: usize = 750;

pub const DEFAULT_BUSINESS_NAME: &str = "Dootri Agency";

// Fixed chat texts.
pub const WELCOME_TEXT: &str = "Bonjour ! Je suis votre Agent SEO Autonome. Je surveille votre Google Business Profile et les tendances de recherche.\n\nComment puis-je vous aider aujourd'hui ? Je peux analyser vos concurrents, rédiger des posts, ou vérifier vos métriques.";
pub const MEMORY_CLEARED_TEXT: &str = "Mémoire effacée. Je suis prêt pour une nouvelle session.";
pub const CHAT_ERROR_TEXT: &str = "Désolé, j'ai rencontré une erreur en traitant votre demande. Veuillez réessayer.";
pub const EMPTY_REPLY_TEXT: &str = "Je n'ai pas pu générer de réponse.";

// Screen-boundary error messages.
pub const STRATEGY_ERROR_TEXT: &str = "Échec de la génération du contenu. Veuillez réessayer. Assurez-vous que votre clé API autorise Gemini 3 Pro.";
pub const IMAGE_ERROR_TEXT: &str = "Échec du traitement de l'image. Veuillez réessayer. Assurez-vous d'avoir accès à gemini-2.5-flash-image.";
pub const IMAGE_MISSING_SOURCE_TEXT: &str = "Veuillez d'abord télécharger une image.";
pub const REVIEW_ERROR_TEXT: &str = "Erreur lors de la génération de la réponse.";
pub const COMPETITOR_ERROR_TEXT: &str = "Erreur lors de l'analyse.";

/// Fallback response when the review-assessment reply cannot be decoded.
pub const DEFAULT_REVIEW_RESPONSE: &str = "Merci pour votre avis.";

use crate::models::{ChecklistCategory, ChecklistItem, CustomerReview, TrackerEntry};

/// The seven recurring tasks the checklist ships with.
pub fn default_checklist() -> Vec<ChecklistItem> {
    let seed: [(&str, &str, bool, ChecklistCategory); 7] = [
        ("1", "Mettre à jour les horaires (Vérification jours fériés)", false, ChecklistCategory::Optimization),
        ("2", "Répondre à tous les nouveaux avis de la semaine dernière", false, ChecklistCategory::Weekly),
        ("3", "Ajouter 5 nouvelles photos (Extérieur & Intérieur)", false, ChecklistCategory::Monthly),
        ("4", "Publier l'offre hebdomadaire", true, ChecklistCategory::Weekly),
        ("5", "Vérifier la section Q&A pour les nouvelles questions", false, ChecklistCategory::Weekly),
        ("6", "Examiner les statistiques et ajuster la stratégie", false, ChecklistCategory::Monthly),
        ("7", "S'assurer que les attributs (Wifi, Parking) sont corrects", true, ChecklistCategory::Optimization),
    ];
    seed.iter()
        .map(|(id, task, completed, category)| ChecklistItem {
            id: (*id).to_string(),
            task: (*task).to_string(),
            completed: *completed,
            category: *category,
        })
        .collect()
}

/// Demo tracker rows used until the user records real data.
pub fn default_tracker_entries() -> Vec<TrackerEntry> {
    let seed: [(&str, &str, u32, u32, u32, u32, f64); 4] = [
        ("1", "Semaine 1", 1200, 45, 12, 2, 4.8),
        ("2", "Semaine 2", 1350, 52, 15, 1, 4.9),
        ("3", "Semaine 3", 1100, 38, 10, 3, 4.7),
        ("4", "Semaine 4", 1500, 65, 22, 5, 5.0),
    ];
    seed.iter()
        .map(|(id, period, impressions, clicks, calls, reviews, rating)| TrackerEntry {
            id: (*id).to_string(),
            period: (*period).to_string(),
            impressions: *impressions,
            clicks: *clicks,
            calls: *calls,
            reviews: *reviews,
            rating: *rating,
        })
        .collect()
}

/// Demo reviews seeding the reputation screen.
pub fn seed_reviews() -> Vec<CustomerReview> {
    let seed: [(&str, &str, u8, &str, &str); 4] = [
        ("1", "Sophie Martin", 5, "Super expérience ! Le service était impeccable et rapide. Je recommande vivement pour tous vos besoins en digital.", "Il y a 2 jours"),
        ("2", "Jean Dupont", 3, "Correct, mais un peu cher pour la prestation fournie. Le résultat est bon mais le délai était long.", "Il y a 1 semaine"),
        ("3", "Marie Curie", 1, "Très déçue. Personne ne répond au téléphone et mon problème n'est toujours pas résolu.", "Il y a 2 semaines"),
        ("4", "Lucas B.", 5, "Une équipe au top ! Merci pour l'accompagnement sur notre projet SEO.", "Il y a 3 jours"),
    ];
    seed.iter()
        .map(|(id, author, rating, text, date)| CustomerReview {
            id: (*id).to_string(),
            author: (*author).to_string(),
            rating: *rating,
            text: (*text).to_string(),
            date: (*date).to_string(),
            sentiment: None,
            response: None,
        })
        .collect()
}

/// Ready-to-use image prompt templates for the prompt library screen.
pub const NANO_PROMPTS: [(&str, &str); 10] = [
    ("Devanture de Magasin", "Une photo professionnelle d'une devanture moderne avec des vitres claires, un éclairage accueillant, une enseigne visible, haute résolution, lumière du jour."),
    ("Intérieur Large", "Plan large de l'intérieur, propre, organisé, éclairage chaleureux, atmosphère accueillante, photoréaliste, 4k."),
    ("Gros Plan Produit", "Plan macro de [NOM DU PRODUIT], haute détail, arrière-plan bokeh, éclairage studio, photographie de produit professionnelle."),
    ("Équipe au Travail", "Photo spontanée de membres d'équipe diversifiés souriant et travaillant ensemble dans un environnement de bureau moderne, lumière naturelle vive."),
    ("Interaction Client", "Membre du personnel amical aidant un client heureux au comptoir, arrière-plan flou, moment authentique."),
    ("Décor Saisonnier", "Intérieur d'entreprise décoré pour [SAISON], atmosphère festive, éclairage confortable, haute qualité."),
    ("Service en Action", "Plan d'action d'un service en cours (ex: coupe de cheveux, réparation, cuisine), mise au point nette sur les mains/l'action, angle dynamique."),
    ("Flat Lay (Vue de dessus)", "Flat lay vue de dessus des outils du métier disposés proprement sur une surface texturée, esthétique minimale, composition équilibrée."),
    ("Extérieur Nuit", "Plan de nuit de l'extérieur du bâtiment avec une lueur chaude provenant des fenêtres, lampadaires, atmosphérique, cinématique."),
    ("Client Heureux", "Portrait d'un client satisfait souriant tenant un produit, arrière-plan extérieur naturel, profondeur de champ."),
];
