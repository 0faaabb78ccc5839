//! Static card data for the full 78-card deck.

use crate::model::card::TarotCard;

pub(crate) static TAROT_DECK: [TarotCard; 78] = [
    TarotCard {
        name: "The Fool",
        image: "/assets/images/the-fool.jpg",
        description: "New beginnings, adventure, and spontaneity. A leap of faith into the unknown, embracing optimism and trusting the journey.",
        reversed_description: "Recklessness, carelessness, and naivety. The risks of poor judgment and fear of stepping into the unknown.",
    },
    TarotCard {
        name: "The Lovers",
        image: "/assets/images/the-lovers.jpg",
        description: "Union, harmony, and alignment. Deep connections, choices, and trust in relationships, signifying harmony and mutual respect.",
        reversed_description: "Disharmony, imbalance, and indecision. A struggle with relationship values or facing conflicts that disrupt harmony.",
    },
    TarotCard {
        name: "The Magician",
        image: "/assets/images/the-magician.jpg",
        description: "Manifestation, skill, and resourcefulness. The power to turn ideas into reality through focused intention and action.",
        reversed_description: "Manipulation, trickery, and poor planning. Misuse of talents, deception, or feeling blocked in achieving one's goals.",
    },
    TarotCard {
        name: "The High Priestess",
        image: "/assets/images/high-priestess.jpg",
        description: "Intuition, mystery, and inner wisdom. A call to trust the subconscious and explore the hidden depths within.",
        reversed_description: "Secrets, repression, and disconnection. Ignoring inner knowledge or facing hidden truths that need to be uncovered.",
    },
    TarotCard {
        name: "The Empress",
        image: "/assets/images/the-empress.jpg",
        description: "Fertility, abundance, and nurturing. A symbol of creativity, nature's bounty, and the nurturing aspects of life.",
        reversed_description: "Insecurity, neglect, and creative block. A lack of growth or feeling dependent on external sources for fulfillment.",
    },
    TarotCard {
        name: "The Emperor",
        image: "/assets/images/the-emperor.jpg",
        description: "Authority, structure, and stability. The embodiment of leadership, discipline, and the strength that comes from order.",
        reversed_description: "Domination, rigidity, and lack of flexibility. An overbearing approach or a struggle with authority and control.",
    },
    TarotCard {
        name: "The Hierophant",
        image: "/assets/images/the-hierophant.jpg",
        description: "Tradition, conformity, and spiritual wisdom. Following established paths, seeking guidance, and embracing conventional values.",
        reversed_description: "Nonconformity, rebellion, and challenging norms. Breaking free from traditions and questioning established beliefs and the status quo.",
    },
    TarotCard {
        name: "The Chariot",
        image: "/assets/images/the-chariot.jpg",
        description: "Determination, control, and triumph. Forward movement, overcoming obstacles through sheer willpower and focused direction.",
        reversed_description: "Lack of direction, loss of control, and obstacles. A need to reassess the path forward amidst confusion or scattered energies.",
    },
    TarotCard {
        name: "Strength",
        image: "/assets/images/strength.jpg",
        description: "Courage, patience, and inner strength. Mastery of emotions and the quiet power of compassion and resilience.",
        reversed_description: "Self-doubt, weakness, and raw emotions. You may be feeling overwhelmed. Struggles with inner strength and a need for self-compassion.",
    },
    TarotCard {
        name: "Justice",
        image: "/assets/images/justice.jpg",
        description: "Fairness, truth, and balance. A call for accountability, embracing clarity, and making decisions with impartiality.",
        reversed_description: "Unfairness, dishonesty, and lack of accountability. A time when biases or unresolved issues cloud judgment.",
    },
    TarotCard {
        name: "The Hermit",
        image: "/assets/images/the-hermit.jpg",
        description: "Introspection, solitude, and soul-searching. Seeking wisdom from within and finding guidance through inner reflection.",
        reversed_description: "Isolation, withdrawal, and avoidance. A resistance to self-reflection or feelings of loneliness and disconnection.",
    },
    TarotCard {
        name: "Wheel of Fortune",
        image: "/assets/images/wheel-of-fortune.jpg",
        description: "Change, cycles, and destiny. The turning point in life's journey, where fortune shifts and new opportunities arise.",
        reversed_description: "Misfortune, resistance to change, and stagnation. Feeling stuck or facing setbacks as the wheel turns unpredictably.",
    },
    TarotCard {
        name: "The Hanged Man",
        image: "/assets/images/hanged-man.jpg",
        description: "Surrender, letting go, and new perspectives. A pause that allows for a different view, encouraging patience and insight.",
        reversed_description: "Stalling, resistance, and indecision. Avoidance of change or an unwillingness to make necessary sacrifices.",
    },
    TarotCard {
        name: "Death",
        image: "/assets/images/death.jpg",
        description: "Endings, transformation, and rebirth. A time of profound change, signifying the closing of one chapter and the start of another.",
        reversed_description: "Resistance to change, fear of endings, and stagnation. Holding onto the past, preventing transformation and renewal.",
    },
    TarotCard {
        name: "Temperance",
        image: "/assets/images/temperance.jpg",
        description: "Balance, moderation, and harmony. Blending energies and finding the middle path through patience and adaptability.",
        reversed_description: "Imbalance, excess, and disharmony. Overindulgence, impatience, or a need to restore equilibrium in life.",
    },
    TarotCard {
        name: "The Devil",
        image: "/assets/images/devil.jpg",
        description: "Bondage, addiction, and materialism. Feeling trapped by temptations, negative patterns, or unhealthy attachments.",
        reversed_description: "Freedom, release, and breaking free. Overcoming dependencies and reclaiming personal power from limiting influences.",
    },
    TarotCard {
        name: "The Tower",
        image: "/assets/images/the-tower.jpg",
        description: "Upheaval, sudden change, and revelation. A moment of chaos that shatters illusions, paving the way for new awareness.",
        reversed_description: "Avoidance, fear of change, and delaying the inevitable. Holding onto stability at the cost of growth and transformation.",
    },
    TarotCard {
        name: "The Star",
        image: "/assets/images/the-star.jpg",
        description: "Hope, inspiration, and renewal. A time of healing, spiritual guidance, and the rekindling of faith in the future.",
        reversed_description: "Despair, lack of faith, and disconnection. A period of feeling lost, with a need to reconnect to hope and inner light.",
    },
    TarotCard {
        name: "The Moon",
        image: "/assets/images/the-moon.jpg",
        description: "Illusion, intuition, and dreams. Navigating through uncertainty and trusting the subconscious mind for guidance.",
        reversed_description: "Clarity, truth, and overcoming fear. Dispelling illusions, revealing hidden truths, and gaining a clearer perspective.",
    },
    TarotCard {
        name: "The Sun",
        image: "/assets/images/the-sun.jpg",
        description: "Joy, success, and vitality. A burst of positivity, bringing clarity, warmth, and a sense of achievement.",
        reversed_description: "Temporary setbacks, delays, and lack of clarity. Facing obstacles to happiness or experiencing moments of self-doubt.",
    },
    TarotCard {
        name: "Judgement",
        image: "/assets/images/judgement.jpg",
        description: "Awakening, reflection, and renewal. A call for self-evaluation, embracing transformation, and listening to a higher calling.",
        reversed_description: "Self-doubt, criticism, and ignoring the call. Avoidance of change or struggling with the inner critic.",
    },
    TarotCard {
        name: "The World",
        image: "/assets/images/the-world.jpg",
        description: "Completion, fulfillment, and integration. The culmination of a journey, achieving goals, and experiencing a sense of wholeness.",
        reversed_description: "Lack of closure, delays, and feeling incomplete. Unfinished business or obstacles preventing the completion of a cycle.",
    },
    TarotCard {
        name: "Ace of Wands",
        image: "/assets/images/ace-wands.jpg",
        description: "Inspiration, new beginnings, potential, creative force. This card indicates a surge of creativity and the birth of a new idea or project.",
        reversed_description: "Delays, lack of direction, missed opportunities. You might feel unmotivated or unable to harness your creative energy.",
    },
    TarotCard {
        name: "Two of Wands",
        image: "/assets/images/two-wands.jpg",
        description: "Planning, decision-making, progress. You are in the process of mapping out a plan and setting goals for the future.",
        reversed_description: "Fear of change, lack of planning, indecision. You may feel uncertain about the next steps or hesitant to move forward.",
    },
    TarotCard {
        name: "Three of Wands",
        image: "/assets/images/three-wands.jpg",
        description: "Expansion, foresight, progress. You've laid the groundwork, and now you're starting to see the results of your efforts.",
        reversed_description: "Playing it safe, delays, obstacles, lack of foresight. Your plans may face unexpected challenges, or you might be feeling stuck.",
    },
    TarotCard {
        name: "Four of Wands",
        image: "/assets/images/four-wands.jpg",
        description: "Celebration, harmony, homecoming. This card signifies joyous events, stability, and a sense of belonging.",
        reversed_description: "Conflict, lack of stability, feeling unwelcome. There may be tension or a lack of harmony in your environment.",
    },
    TarotCard {
        name: "Five of Wands",
        image: "/assets/images/five-wands.jpg",
        description: "Conflict, competition, disagreements. This card often indicates challenges, but they can be productive and help you grow.",
        reversed_description: "Avoiding conflict, inner turmoil, resolution. You might be stepping away from conflict or finding ways to resolve disputes.",
    },
    TarotCard {
        name: "Six of Wands",
        image: "/assets/images/six-wands.jpg",
        description: "Success, recognition, achievement. You've overcome obstacles and are now receiving recognition for your efforts.",
        reversed_description: "Failure, lack of recognition, self-doubt. You may feel overlooked or insecure about your achievements.",
    },
    TarotCard {
        name: "Seven of Wands",
        image: "/assets/images/seven-wands.jpg",
        description: "Perseverance, defense, maintaining control. You are standing your ground and defending your position against opposition.",
        reversed_description: "Overwhelmed, giving up, and feeling vulnerable. You might feel outnumbered or struggle to keep up with the demands.",
    },
    TarotCard {
        name: "Eight of Wands",
        image: "/assets/images/eight-wands.jpg",
        description: "Rapid action, movement, swift progress. Things are happening quickly, and you're moving toward your goals at a fast pace.",
        reversed_description: "Delays, frustration, obstacles. There may be setbacks or a sense of stagnation preventing you from moving forward.",
    },
    TarotCard {
        name: "Nine of Wands",
        image: "/assets/images/nine-wands.jpg",
        description: "Resilience, courage, persistence. You're facing challenges but have the strength and determination to keep going.",
        reversed_description: "Exhaustion, overwhelmed, defensiveness. You might feel drained or overly protective, finding it hard to continue.",
    },
    TarotCard {
        name: "Ten of Wands",
        image: "/assets/images/ten-wands.jpg",
        description: "Burden, responsibility, hard work. You may be carrying a heavy load or taking on more than you can handle.",
        reversed_description: "Release, avoiding responsibility, stress. It's time to let go of burdens or delegate tasks to avoid burnout.",
    },
    TarotCard {
        name: "Page of Wands",
        image: "/assets/images/page-wands.jpg",
        description: "Inspiration, exploration, potential. This card suggests the beginning of a new venture or a message of inspiration.",
        reversed_description: "Lack of direction, procrastination, immaturity. You might be struggling to channel your creative energy effectively.",
    },
    TarotCard {
        name: "Knight of Wands",
        image: "/assets/images/knight-wands.jpg",
        description: "Action, adventure, courage. The Knight of Wands is full of energy and ready to take bold action toward their goals.",
        reversed_description: "Impulsiveness, recklessness, haste. There might be a risk of acting without thinking or becoming easily frustrated.",
    },
    TarotCard {
        name: "Queen of Wands",
        image: "/assets/images/queen-wands.jpg",
        description: "Confidence, determination, independence. The Queen embodies passion, courage, and charisma, leading with enthusiasm.",
        reversed_description: "Insecurity, jealousy, selfishness. You might be feeling uncertain about your abilities or dealing with a challenging individual.",
    },
    TarotCard {
        name: "King of Wands",
        image: "/assets/images/king-wands.jpg",
        description: "Leadership, vision, entrepreneurship. The King represents someone who is mature, inspiring, and a natural leader.",
        reversed_description: "Impulsiveness, ruthlessness, overbearing. You might be struggling with control issues or acting too aggressively.",
    },
    TarotCard {
        name: "Ace of Cups",
        image: "/assets/images/ace-cups.jpg",
        description: "New relationships, emotional awakening, love, compassion. This card signifies the beginning of emotional fulfillment and an outpouring of love and joy.",
        reversed_description: "Emotional blockages, repressed feelings, emptiness. You may be feeling disconnected from your emotions or experiencing a lack of emotional fulfillment.",
    },
    TarotCard {
        name: "Two of Cups",
        image: "/assets/images/two-cups.jpg",
        description: "Partnership, harmony, mutual attraction, connection. This card represents a harmonious relationship, mutual respect, and emotional balance.",
        reversed_description: "Imbalance, disharmony, broken communication. There might be conflict, misunderstanding, or a lack of connection in your relationships.",
    },
    TarotCard {
        name: "Three of Cups",
        image: "/assets/images/three-cups.jpg",
        description: "Celebration, friendship, joy, community. It signifies gatherings, social events, and a time of happiness shared with others and a sense of belonging.",
        reversed_description: "Overindulgence, gossip, isolation, disharmony. You might be experiencing social tension, feeling left out, or overindulging in escapist behaviors.",
    },
    TarotCard {
        name: "Four of Cups",
        image: "/assets/images/four-cups.jpg",
        description: "Contemplation, apathy, reevaluation. This card suggests a period of introspection and the need to focus on what truly matters, often indicating dissatisfaction or boredom.",
        reversed_description: "Awareness, acceptance, seizing opportunities. You're beginning to recognize the opportunities around you and move past feelings of stagnation.",
    },
    TarotCard {
        name: "Five of Cups",
        image: "/assets/images/five-cups.jpg",
        description: "Loss, regret, disappointment, grief. It represents emotional pain and the challenge of moving on from past hurts or losses.",
        reversed_description: "Acceptance, moving on, healing. You're starting to let go of past griefs and are on the path to emotional recovery.",
    },
    TarotCard {
        name: "Six of Cups",
        image: "/assets/images/six-cups.jpg",
        description: "Nostalgia, memories, innocence, childhood. This card is about revisiting the past, reminiscing, and the joy that comes with innocent, simple pleasures.",
        reversed_description: "Stuck in the past, unrealistic expectations. You may be overly focused on the past, preventing you from moving forward.",
    },
    TarotCard {
        name: "Seven of Cups",
        image: "/assets/images/seven-cups.jpg",
        description: "Illusion, temptation, wishful thinking. It represents choices, opportunities, and the need to discern between reality and fantasy.",
        reversed_description: "Clarity, decisiveness, reality check. You're beginning to see things as they are and can make choices that align with your values and goals.",
    },
    TarotCard {
        name: "Eight of Cups",
        image: "/assets/images/eight-cups.jpg",
        description: "Walking away, seeking deeper meaning, letting go. This card signifies a journey of leaving behind what no longer serves you in search of something more fulfilling.",
        reversed_description: "Fear of change, stagnation, avoiding the truth. You might be reluctant to leave a situation even though it no longer fulfills or serves you.",
    },
    TarotCard {
        name: "Nine of Cups",
        image: "/assets/images/nine-cups.jpg",
        description: "Contentment, satisfaction, emotional fulfillment. Known as the 'wish card', it represents a sense of personal achievement and happiness.",
        reversed_description: "Overindulgence, dissatisfaction, materialism. You may be feeling a sense of emptiness despite outward success or indulgence.",
    },
    TarotCard {
        name: "Ten of Cups",
        image: "/assets/images/ten-cups.jpg",
        description: "Harmony, family, happiness, fulfillment. This card represents emotional contentment, lasting happiness in relationships, and a sense of unity.",
        reversed_description: "Disconnection, misalignment, family strife. There might be disharmony or tension in your personal or family life.",
    },
    TarotCard {
        name: "Page of Cups",
        image: "/assets/images/page-cups.jpg",
        description: "Creativity, imagination, new feelings, curiosity. The Page of Cups brings messages of new emotional beginnings, creativity, and intuitive insights.",
        reversed_description: "Emotional immaturity, escapism, creative blocks. You may be feeling out of touch with your emotions or struggling to express yourself creatively.",
    },
    TarotCard {
        name: "Knight of Cups",
        image: "/assets/images/knight-cups.jpg",
        description: "Romance, charm, idealism, following the heart. The Knight of Cups is a dreamer and a romantic, pursuing emotional or creative goals with passion.",
        reversed_description: "Moodiness, unrealistic expectations, over-idealism. You might be acting impulsively based on emotions or struggling with unrealistic expectations.",
    },
    TarotCard {
        name: "Queen of Cups",
        image: "/assets/images/queen-cups.jpg",
        description: "Compassion, nurturing, intuition, emotional security. The Queen represents a deep connection to emotions and the ability to support others with empathy and care.",
        reversed_description: "Emotional instability, co-dependency, insecurity. You may be feeling overwhelmed by your emotions or struggling with boundaries in relationships.",
    },
    TarotCard {
        name: "King of Cups",
        image: "/assets/images/king-cups.jpg",
        description: "Emotional balance, control, generosity, wisdom. The King embodies emotional maturity, offering support and understanding while maintaining his own emotional equilibrium.",
        reversed_description: "Emotional manipulation, moodiness, volatility. There may be a struggle to manage emotions, leading to instability or manipulation.",
    },
    TarotCard {
        name: "Ace of Swords",
        image: "/assets/images/ace-swords.jpg",
        description: "Breakthrough, clarity, new ideas, mental clarity. This card represents a fresh perspective, a new way of thinking, or a significant intellectual breakthrough.",
        reversed_description: "Confusion, chaos, lack of clarity, poor judgment. There may be mental blockages, misinformation, or a struggle to find clarity.",
    },
    TarotCard {
        name: "Two of Swords",
        image: "/assets/images/two-swords.jpg",
        description: "Indecision, stalemate, difficult choices, denial. This card often indicates a need to make a challenging decision or a situation where you're avoiding facing the truth.",
        reversed_description: "Clarity, decision, truth revealed. You're beginning to see things more clearly and are ready to make a choice or move past denial.",
    },
    TarotCard {
        name: "Three of Swords",
        image: "/assets/images/three-swords.jpg",
        description: "Heartbreak, sorrow, grief, betrayal. A card of emotional pain, it often signals heartbreak, separation, or deep disappointment.",
        reversed_description: "Recovery, forgiveness, releasing pain. You're starting to heal from past wounds or moving on from a painful experience.",
    },
    TarotCard {
        name: "Four of Swords",
        image: "/assets/images/four-swords.jpg",
        description: "Rest, recuperation, contemplation, solitude. This card suggests a time for rest, meditation, and recovery after a period of stress or conflict.",
        reversed_description: "Burnout, restlessness, refusal to rest. You may be feeling overwhelmed and in need of rest but are ignoring the signs.",
    },
    TarotCard {
        name: "Five of Swords",
        image: "/assets/images/five-swords.jpg",
        description: "Conflict, defeat, betrayal, loss. This card represents disputes, arguments, or a sense of hollow victory where winning comes at a cost. Feeling defeated.",
        reversed_description: "Reconciliation, forgiveness, moving on. You're ready to make amends or move past a period of conflict.",
    },
    TarotCard {
        name: "Six of Swords",
        image: "/assets/images/six-swords.jpg",
        description: "Transition, moving on, leaving behind. This card signifies a journey towards healing, leaving difficulties behind, and moving towards a calmer state of mind.",
        reversed_description: "Resistance to change, emotional baggage, stagnation. You may be struggling to move on or feeling stuck in a challenging situation.",
    },
    TarotCard {
        name: "Seven of Swords",
        image: "/assets/images/seven-swords.jpg",
        description: "Deception, trickery, strategy, betrayal. This card often points to dishonesty, whether it's being cunning or being deceived by someone else.",
        reversed_description: "Revelation, coming clean, rethinking tactics, self-deception. There's an opportunity to be honest, confess, or rethink your approach.",
    },
    TarotCard {
        name: "Eight of Swords",
        image: "/assets/images/eight-swords.jpg",
        description: "Isolation, restriction, self-imposed prison. This card represents feeling trapped, powerless, or restricted by your own thoughts or circumstances.",
        reversed_description: "Self-acceptance, freedom, release. You're starting to break free from limiting beliefs or situations that have held you back.",
    },
    TarotCard {
        name: "Nine of Swords",
        image: "/assets/images/nine-swords.jpg",
        description: "Anxiety, worry, fear, nightmares. This card signifies mental anguish, worry, and fear, or guilt that keeps you up at night, often more imagined than real.",
        reversed_description: "Hope, reaching out, overcoming fear. You may be beginning to face and overcome your fears or seeking help for your anxieties.",
    },
    TarotCard {
        name: "Ten of Swords",
        image: "/assets/images/ten-swords.jpg",
        description: "Painful ending, betrayal, crisis, rock bottom. This card signifies a dramatic ending or a situation where things cannot get worse, signaling a need for acceptance and closure.",
        reversed_description: "Recovery, regeneration, hope. You're beginning to heal from past wounds and find way to move forward.",
    },
    TarotCard {
        name: "Page of Swords",
        image: "/assets/images/page-swords.jpg",
        description: "Curiosity, new ideas, mental energy, communication. The Page brings news of new intellectual pursuits or a fresh perspective.",
        reversed_description: "Deception, manipulation, lack of direction. There may be misunderstandings, scattered thoughts, or someone around you who is not trustworthy.",
    },
    TarotCard {
        name: "Knight of Swords",
        image: "/assets/images/knight-swords.jpg",
        description: "Ambition, aggression, speed, directness. The Knight charges forward with determination, often representing a need for swift action or decisiveness.",
        reversed_description: "Hasty decisions, impulsiveness, recklessness. You may be acting without thinking or causing harm with your words or actions.",
    },
    TarotCard {
        name: "Queen of Swords",
        image: "/assets/images/queen-swords.jpg",
        description: "Perceptive, independent, clear-minded, unbiased. The Queen represents clarity of thought, the ability to cut through deception, and making decisions based on logic.",
        reversed_description: "Cold-hearted, overly critical, distant. You may be feeling detached and struggling to connect with others emotionally.",
    },
    TarotCard {
        name: "King of Swords",
        image: "/assets/images/king-swords.jpg",
        description: "Intellectual power, authority, truth, discipline. The King symbolizes mastery of the mind, fairness, and the use of intellect to lead and make decisions.",
        reversed_description: "Manipulation, cruelty, abusive power. There may be misuse of authority, or a tendency to be overly rigid and controlling. Using your intellect to deceive or manipulate others.",
    },
    TarotCard {
        name: "Ace of Pentacles",
        image: "/assets/images/ace-pents.jpg",
        description: "New financial opportunity, prosperity, abundance. This card symbolizes the beginning of a new venture, career, or opportunity that can lead to material or financial gain.",
        reversed_description: "Lost opportunity, lack of planning, scarcity. You may be missing out on a financial opportunity or feeling insecure about your financial stability.",
    },
    TarotCard {
        name: "Two of Pentacles",
        image: "/assets/images/two-pents.jpg",
        description: "Balance, adaptability, time management, juggling resources. This card suggests the need to balance multiple aspects of life, such as work and personal responsibilities.",
        reversed_description: "Disorganized, lack of balance, financial disarray. You may be struggling to manage your responsibilities or feeling overwhelmed by life's demands.",
    },
    TarotCard {
        name: "Three of Pentacles",
        image: "/assets/images/three-pents.jpg",
        description: "Teamwork, collaboration, learning, skill development. This card represents the power of working together towards a common goal and the rewards of cooperation and skill mastery.",
        reversed_description: "Lack of teamwork, poor workmanship, misalignment. There may be a lack of cooperation, communication breakdown, or difficulties in working towards a shared objective.",
    },
    TarotCard {
        name: "Four of Pentacles",
        image: "/assets/images/four-pents.jpg",
        description: "Security, stability, holding on to resources, control. This card often indicates a need to be cautious with resources, focusing on saving, or guarding what you have.",
        reversed_description: "Greed, materialism, over-attachment, loss. You may be holding on too tightly to material possessions or experiencing financial insecurity.",
    },
    TarotCard {
        name: "Five of Pentacles",
        image: "/assets/images/five-pents.jpg",
        description: "Financial loss, poverty, insecurity, isolation. This card often signals a period of hardship, whether it be financial difficulties, health issues, or a sense of being left out in the cold.",
        reversed_description: "Recovery, improving finances, charity, spiritual richness. There may be a turn for the better, where you start to recover from a difficult situation or find support and help.",
    },
    TarotCard {
        name: "Six of Pentacles",
        image: "/assets/images/six-pents.jpg",
        description: "Generosity, charity, giving and receiving, sharing wealth. This card represents the balance of giving and receiving and the importance of sharing resources or help with others.",
        reversed_description: "Debt, selfishness, inequality, strings attached. There might be an imbalance in the give-and-take dynamic, or assistance is being offered with conditions.",
    },
    TarotCard {
        name: "Seven of Pentacles",
        image: "/assets/images/seven-pents.jpg",
        description: "Patience, hard work, delayed success, investment. This card suggests that your efforts and hard work are starting to pay off, but patience is needed for the full rewards to manifest.",
        reversed_description: "Lack of growth, impatience, wasted effort. You might be feeling frustrated with slow progress or questioning whether your efforts are worth the investment.",
    },
    TarotCard {
        name: "Eight of Pentacles",
        image: "/assets/images/eight-pents.jpg",
        description: "Skill development, apprenticeship, dedication, mastery. This card signifies hard work, learning new skills, and striving for mastery in a craft or profession.",
        reversed_description: "Lack of focus, uninspired, lack of commitment. There may be a feeling of monotony, lack of interest, or a struggle to find the motivation to keep working on a task.",
    },
    TarotCard {
        name: "Nine of Pentacles",
        image: "/assets/images/nine-pents.jpg",
        description: "Abundance, luxury, self-sufficiency, financial independence. This card represents the enjoyment of the fruits of your labor, financial independence, and personal success.",
        reversed_description: "Overindulgence, dependence, financial setbacks. You may be struggling with financial dependence or overindulging in luxuries without considering future consequences.",
    },
    TarotCard {
        name: "Ten of Pentacles",
        image: "/assets/images/ten-pents.jpg",
        description: "Wealth, inheritance, family legacy, long-term success. This card signifies financial stability, family legacy, and the culmination of efforts resulting in lasting security.",
        reversed_description: "Financial failure, loss, instability, family disputes. There may be concerns over financial loss, instability, or family-related conflicts over money.",
    },
    TarotCard {
        name: "Page of Pentacles",
        image: "/assets/images/page-pents.jpg",
        description: "Ambition, desire, new venture, opportunity. The Page indicates the beginning of a new financial or educational endeavor and represents curiosity and the willingness to learn.",
        reversed_description: "Lack of progress, short-sightedness, procrastination. There may be a lack of motivation, focus, or direction in pursuing your goals.",
    },
    TarotCard {
        name: "Knight of Pentacles",
        image: "/assets/images/knight-pents.jpg",
        description: "Hard work, responsibility, productivity, routine. The Knight represents a diligent and responsible approach to achieving goals, emphasizing persistence and dedication.",
        reversed_description: "Laziness, stubbornness, and lack of progress. There might be a feeling of being stuck, overly cautious, or resistant to change and new methods.",
    },
    TarotCard {
        name: "Queen of Pentacles",
        image: "/assets/images/queen-pents.jpg",
        description: "Nurturing, practicality, financial security, resourcefulness. The Queen embodies the nurturing, practical aspect of wealth and material comfort, focusing on providing for and supporting others.",
        reversed_description: "Self-centeredness, work-life imbalance, smothering. There may be a focus on materialism at the expense of other areas of life or a tendency to be overprotective.",
    },
    TarotCard {
        name: "King of Pentacles",
        image: "/assets/images/king-pents.jpg",
        description: "Wealth, business acumen, discipline, power. The King signifies mastery over the material world, success in business, and a disciplined approach to managing resources.",
        reversed_description: "Greed, corruption, material loss, stubbornness. There may be a misuse of power, obsession with wealth, or difficulty in managing finances responsibly.",
    },
];
