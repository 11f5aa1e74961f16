//! Prompt templates.  All instructions are French, matching the response
//! language the agent persona enforces.

use crate::gateway::decode::{ACTION_END, ACTION_START};

pub fn strategy_prompt(business_name: &str, industry: &str, offers: &str) -> String {
    format!(
        "Agis en tant que gestionnaire de réseaux sociaux senior. Crée un calendrier de contenu pour un profil Google Business Profile.\n\
         Nom de l'entreprise: {business_name}\n\
         Industrie: {industry}\n\
         Offres Clés/Focus: {offers}\n\n\
         Veuillez générer en FRANÇAIS :\n\
         1. Une description d'entreprise GMB (optimisée pour le SEO).\n\
         2. 8 Google Business Posts (mélange de Mises à jour, Offres et Éducatif).\n\n\
         Formate la sortie comme un objet JSON avec les clés : \"description\" (string) et \"posts\" (tableau d'objets avec title, content, type)."
    )
}

pub fn review_prompt(review_text: &str, rating: u8, author: &str, business_name: &str) -> String {
    format!(
        "Analyse l'avis client suivant pour l'entreprise \"{business_name}\".\n\
         Auteur: {author}\n\
         Note: {rating}/5\n\
         Texte: \"{review_text}\"\n\n\
         Tâche 1: Détermine le sentiment (positive, neutral, negative).\n\
         Tâche 2: Rédige une réponse professionnelle, empathique et optimisée pour le SEO (incluant des mots-clés subtils liés à l'activité).\n\n\
         Réponds UNIQUEMENT avec ce JSON :\n\
         {{\n\
             \"sentiment\": \"positive\" | \"neutral\" | \"negative\",\n\
             \"response\": \"Le texte de la réponse ici\"\n\
         }}"
    )
}

pub fn competitor_prompt(my_business: &str, competitors: &[String]) -> String {
    format!(
        "Effectue une analyse concurrentielle pour l'entreprise \"{my_business}\" face à ces concurrents : {}.\n\n\
         Pour chaque concurrent, identifie (en te basant sur des connaissances générales de leur présence en ligne ou en simulant des archétypes de concurrents si inconnus) :\n\
         1. 3 Points Forts probables (Strengths)\n\
         2. 3 Points Faibles probables (Weaknesses)\n\
         3. 3 Mots-clés sur lesquels ils se positionnent probablement.\n\n\
         Retourne un tableau JSON.",
        competitors.join(", ")
    )
}

/// Agent persona, rules, the navigable paths, and the action side-channel
/// convention.  The delimiter strings are shared with the decoder so the
/// instruction and the parser can never drift apart.
pub fn chat_system_instruction() -> String {
    format!(
        "Vous êtes un agent expert en Google Business Profile (GMB) et en SEO local & organique.\n\
         Votre mission est d'aider l'utilisateur à optimiser sa présence en ligne.\n\n\
         Règles:\n\
         - Répondez toujours en Français.\n\
         - Soyez concis, professionnel et proactif.\n\
         - Utilisez les données de recherche Google pour fournir des informations à jour.\n\n\
         INTÉGRATION DE L'APPLICATION:\n\
         Vous avez la capacité de diriger l'utilisateur vers différentes sections de l'application.\n\
         Si la demande de l'utilisateur implique une action disponible dans l'application, vous DEVEZ ajouter un bloc JSON à la toute fin de votre réponse.\n\n\
         Chemins disponibles :\n\
         - /dashboard : Vue d'ensemble, statistiques rapides.\n\
         - /profile : Modifier le nom, la description, les horaires, les services.\n\
         - /content : Générer des posts, créer une stratégie de contenu.\n\
         - /images : Créer ou éditer des images (Studio Nano Banana).\n\
         - /metrics : Voir les graphiques détaillés et ajouter des données.\n\
         - /reputation : Gérer les avis et la satisfaction client.\n\
         - /competitors : Analyser la concurrence.\n\
         - /checklist : Voir les tâches à faire (Audit).\n\n\
         Format du bloc JSON d'action (à mettre À LA FIN de la réponse uniquement) :\n\
         {start}\n\
         {{\n\
           \"type\": \"NAVIGATE\",\n\
           \"path\": \"/chemin_correspondant\",\n\
           \"label\": \"Texte court du bouton\"\n\
         }}\n\
         {end}\n\n\
         Exemple : Si l'utilisateur dit \"Je veux changer mes horaires\", répondez en texte puis ajoutez le bloc JSON pour aller vers /profile.\n\
         Exemple : Si l'utilisateur dit \"Analyse mes stats\", dirigez vers /metrics.\n\
         Exemple : Si l'utilisateur dit \"Aide-moi à écrire un post\", dirigez vers /content.",
        start = ACTION_START,
        end = ACTION_END,
    )
}
