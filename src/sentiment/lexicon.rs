// Word polarities in [-1, 1], modeled on the adjective lexicon used by common
// pattern-based English sentiment taggers, extended with headline vocabulary.
pub const POLARITY: &[(&str, f64)] = &[
    // positive
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("beautiful", 0.85),
    ("best", 1.0),
    ("better", 0.5),
    ("boost", 0.3),
    ("boosts", 0.3),
    ("breakthrough", 0.5),
    ("bright", 0.7),
    ("brilliant", 0.9),
    ("calm", 0.3),
    ("celebrate", 0.5),
    ("celebrates", 0.5),
    ("celebration", 0.5),
    ("champion", 0.5),
    ("champions", 0.5),
    ("clean", 0.37),
    ("clear", 0.1),
    ("comfortable", 0.4),
    ("confident", 0.5),
    ("cool", 0.35),
    ("delight", 0.7),
    ("delighted", 0.7),
    ("easy", 0.43),
    ("effective", 0.6),
    ("efficient", 0.5),
    ("enjoy", 0.4),
    ("excellent", 1.0),
    ("exceptional", 0.67),
    ("excited", 0.38),
    ("exciting", 0.3),
    ("extraordinary", 0.5),
    ("fabulous", 0.4),
    ("fantastic", 0.4),
    ("fascinating", 0.7),
    ("favorite", 0.5),
    ("fine", 0.42),
    ("fortunate", 0.4),
    ("free", 0.4),
    ("fresh", 0.3),
    ("friendly", 0.38),
    ("fun", 0.3),
    ("gain", 0.3),
    ("gains", 0.3),
    ("generous", 0.5),
    ("glad", 0.5),
    ("glorious", 0.8),
    ("good", 0.7),
    ("gorgeous", 0.7),
    ("great", 0.8),
    ("greatest", 1.0),
    ("happy", 0.8),
    ("healthy", 0.5),
    ("helpful", 0.5),
    ("historic", 0.3),
    ("hope", 0.3),
    ("hopeful", 0.4),
    ("ideal", 0.9),
    ("impressive", 1.0),
    ("improve", 0.4),
    ("improved", 0.4),
    ("improves", 0.4),
    ("incredible", 0.9),
    ("innovative", 0.5),
    ("inspiring", 0.5),
    ("interesting", 0.5),
    ("kind", 0.6),
    ("love", 0.5),
    ("lovely", 0.5),
    ("lucky", 0.33),
    ("magnificent", 1.0),
    ("marvelous", 0.9),
    ("nice", 0.6),
    ("optimistic", 0.4),
    ("outstanding", 0.5),
    ("peaceful", 0.25),
    ("perfect", 1.0),
    ("pleasant", 0.73),
    ("pleased", 0.5),
    ("popular", 0.6),
    ("positive", 0.23),
    ("powerful", 0.3),
    ("profit", 0.3),
    ("profitable", 0.6),
    ("progress", 0.3),
    ("promising", 0.5),
    ("proud", 0.8),
    ("rally", 0.3),
    ("rallies", 0.3),
    ("record", 0.2),
    ("recover", 0.3),
    ("recovery", 0.3),
    ("remarkable", 0.75),
    ("rich", 0.38),
    ("safe", 0.5),
    ("secure", 0.4),
    ("smart", 0.21),
    ("soar", 0.4),
    ("soars", 0.4),
    ("solid", 0.3),
    ("spectacular", 0.6),
    ("splendid", 1.0),
    ("stable", 0.2),
    ("strong", 0.43),
    ("stronger", 0.43),
    ("stunning", 0.5),
    ("success", 0.3),
    ("successful", 0.75),
    ("superb", 1.0),
    ("support", 0.2),
    ("surge", 0.3),
    ("surges", 0.3),
    ("terrific", 1.0),
    ("thrilled", 0.5),
    ("thriving", 0.5),
    ("top", 0.5),
    ("triumph", 0.6),
    ("upbeat", 0.4),
    ("valuable", 0.5),
    ("victory", 0.4),
    ("vibrant", 0.5),
    ("welcome", 0.8),
    ("win", 0.8),
    ("wins", 0.8),
    ("winning", 0.5),
    ("wonderful", 1.0),
    ("worthy", 0.5),
    // negative
    ("abuse", -0.5),
    ("afraid", -0.6),
    ("alarming", -0.5),
    ("angry", -0.5),
    ("annoying", -0.8),
    ("anxious", -0.25),
    ("attack", -0.4),
    ("attacks", -0.4),
    ("awful", -1.0),
    ("bad", -0.7),
    ("banned", -0.3),
    ("bankrupt", -0.6),
    ("bitter", -0.1),
    ("bleak", -0.5),
    ("boring", -1.0),
    ("broken", -0.4),
    ("brutal", -0.88),
    ("chaos", -0.5),
    ("chaotic", -0.5),
    ("collapse", -0.5),
    ("collapses", -0.5),
    ("conflict", -0.3),
    ("corrupt", -0.5),
    ("crash", -0.5),
    ("crashes", -0.5),
    ("crisis", -0.5),
    ("critical", -0.2),
    ("cruel", -1.0),
    ("damage", -0.4),
    ("damaged", -0.4),
    ("danger", -0.5),
    ("dangerous", -0.6),
    ("dead", -0.2),
    ("deadly", -0.5),
    ("death", -0.5),
    ("decline", -0.3),
    ("declines", -0.3),
    ("defeat", -0.4),
    ("delay", -0.2),
    ("delayed", -0.2),
    ("desperate", -0.6),
    ("destroy", -0.6),
    ("destroyed", -0.6),
    ("devastating", -0.8),
    ("difficult", -0.5),
    ("dire", -0.6),
    ("dirty", -0.6),
    ("disappointing", -0.6),
    ("disaster", -0.7),
    ("disastrous", -0.8),
    ("drop", -0.2),
    ("drops", -0.2),
    ("dull", -0.31),
    ("fail", -0.5),
    ("failed", -0.5),
    ("fails", -0.5),
    ("failure", -0.32),
    ("fake", -0.5),
    ("fall", -0.2),
    ("falls", -0.2),
    ("fear", -0.4),
    ("fears", -0.4),
    ("fraud", -0.6),
    ("grim", -0.5),
    ("guilty", -0.5),
    ("harm", -0.4),
    ("harmful", -0.5),
    ("hate", -0.8),
    ("horrible", -1.0),
    ("hostile", -0.5),
    ("hurt", -0.4),
    ("illegal", -0.5),
    ("injured", -0.4),
    ("killed", -0.2),
    ("lose", -0.3),
    ("loses", -0.3),
    ("losing", -0.3),
    ("loss", -0.3),
    ("losses", -0.3),
    ("lost", -0.3),
    ("mess", -0.4),
    ("miserable", -1.0),
    ("negative", -0.3),
    ("nasty", -1.0),
    ("painful", -0.7),
    ("panic", -0.5),
    ("plunge", -0.4),
    ("plunges", -0.4),
    ("poor", -0.4),
    ("problem", -0.3),
    ("problems", -0.3),
    ("recession", -0.4),
    ("risky", -0.5),
    ("sad", -0.5),
    ("scandal", -0.5),
    ("scary", -0.5),
    ("severe", -0.4),
    ("shock", -0.4),
    ("shocking", -0.5),
    ("sick", -0.71),
    ("slump", -0.4),
    ("stupid", -0.8),
    ("suffer", -0.4),
    ("terrible", -1.0),
    ("threat", -0.4),
    ("threatens", -0.4),
    ("tragic", -0.75),
    ("tragedy", -0.7),
    ("trouble", -0.3),
    ("troubled", -0.3),
    ("ugly", -0.7),
    ("unfortunate", -0.5),
    ("unhappy", -0.6),
    ("violent", -0.8),
    ("war", -0.4),
    ("weak", -0.38),
    ("weaker", -0.38),
    ("worried", -0.5),
    ("worse", -0.4),
    ("worst", -1.0),
    ("wrong", -0.5),
];

pub const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.4),
    ("deeply", 1.3),
    ("especially", 1.2),
    ("exceptionally", 1.4),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("incredibly", 1.4),
    ("most", 1.3),
    ("particularly", 1.2),
    ("quite", 1.1),
    ("really", 1.3),
    ("so", 1.3),
    ("super", 1.3),
    ("too", 1.2),
    ("totally", 1.3),
    ("truly", 1.3),
    ("very", 1.3),
];

pub const NEGATORS: &[&str] = &["not", "no", "never", "nor", "neither", "without", "hardly"];
