pub(crate) const WORDS: &[&str] = &[
  "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog", "computer", "program", "typing",
  "speed", "accuracy", "practice", "be", "to", "of", "and", "a", "in", "that", "have", "it", "for",
  "not", "on", "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they",
  "we", "say", "her", "she", "or", "an", "will", "my", "one", "all", "would", "there", "their",
  "what", "so", "up", "out", "if", "about", "who", "get", "which", "go", "me", "when", "make",
  "can", "like", "time", "no", "just", "him", "know", "take", "people", "into", "year", "your",
  "good", "some", "could", "them", "see", "other", "than", "then", "now", "look", "only", "come",
  "its", "think", "also", "back", "after", "use", "two", "how", "our", "work", "first", "well",
  "way", "even", "new", "want", "because", "any", "these", "give", "day", "most", "us",
];

pub(crate) const SENTENCES: &[&str] = &[
  "The quick brown fox jumps over the lazy dog.",
  "Practice makes progress, not perfection.",
  "A journey of a thousand miles begins with a single step.",
  "Typing fast is useless without typing right.",
  "Every keyboard has a home row; keep your fingers there.",
  "Pack my box with five dozen liquor jugs.",
  "Slow and steady wins the race, but speed comes with practice.",
  "Good programs are written twice: once to work, once to read.",
];
