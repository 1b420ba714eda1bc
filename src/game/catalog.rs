//! Built-in campaigns.

use super::campaign::{Campaign, DayRule, Investigation};
use super::conversation::{Conversation, Question};

// ---------------------------------------------------------------------------
// Plot conversations: the Lantern network, and what happens once it is flagged
// ---------------------------------------------------------------------------

fn plot_conversations() -> Vec<Conversation> {
    vec![
        Conversation::new(
            1,
            true,
            &[
                ("Vera", "Block 9 changes guards at three. We have eleven minutes."),
                ("Tomas", "Eleven minutes to copy four years of recordings?"),
                ("Vera", "Not all of it. Only the files with a red seal."),
                ("Tomas", "And if the terminal logs the access?"),
                ("Vera", "It will. By then the copies will be in every lantern's hands."),
                ("Tomas", "Then I'll bring the drives. Keep the light on."),
            ],
        )
        .with_secret("Conspiracy to steal classified surveillance archives"),
        Conversation::new(
            2,
            true,
            &[
                ("Marcus", "The press arrives at midnight. Pier 7."),
                ("Julia", "The same crates as last time?"),
                ("Marcus", "Three times as many. Leaflets for every district."),
                ("Julia", "What about the harbour inspectors?"),
                ("Marcus", "Paid. They'll be looking at the wrong ship."),
                ("Julia", "Good. I'll have the bread vans waiting."),
            ],
        )
        .with_secret("Smuggling a printing press with bribed officials"),
        Conversation::new(
            3,
            true,
            &[
                ("Dr. Chen", "Four more families asked for exemption papers."),
                ("Dr. Patel", "Do any of them actually have the condition?"),
                ("Dr. Chen", "Not one. But the relocation trains leave on Friday."),
                ("Dr. Patel", "Then they have it now. Stamp the forms."),
                ("Dr. Chen", "If the Bureau checks the bloodwork..."),
                ("Dr. Patel", "The Bureau hasn't checked anything in years."),
            ],
        )
        .with_secret("Forging medical exemptions to hide dissidents from relocation"),
        Conversation::new(
            4,
            true,
            &[
                ("Tomas", "They took Vera this morning. Someone flagged the Block 9 call."),
                ("Lena", "Did she have the drives on her?"),
                ("Tomas", "No. They're under the floor at my mother's."),
                ("Lena", "Move them tonight. Split them between three houses."),
                ("Tomas", "And Vera?"),
                ("Lena", "Vera knew the price. Keep the light on."),
            ],
        )
        .with_secret("Hiding stolen archive copies after an arrest"),
        Conversation::new(
            5,
            true,
            &[
                ("Julia", "Pier 7 is crawling with Bureau coats."),
                ("Dock Worker", "So the press is gone?"),
                ("Julia", "The press is fine. We use the rail yard from now on."),
                ("Dock Worker", "The yard master won't like it."),
                ("Julia", "The yard master owes Marcus his life. He'll open the gate."),
            ],
        )
        .with_secret("Rerouting the smuggling operation after Pier 7 was raided"),
        Conversation::new(
            6,
            false,
            &[
                ("Officer Brandt", "The Patel clinic is sealed, as ordered."),
                ("Officer Koss", "And the patient files?"),
                ("Officer Brandt", "Boxed for the Bureau. Every family on those forms is listed."),
                ("Officer Koss", "The relocation office will want the list by Friday."),
                ("Officer Brandt", "They'll have it Thursday. Good work all round."),
            ],
        ),
    ]
    .into_iter()
    .map(Conversation::special)
    .collect()
}

// ---------------------------------------------------------------------------
// Filler pool
// ---------------------------------------------------------------------------

fn filler_conversations() -> Vec<Conversation> {
    vec![
        // --- guilty ---
        Conversation::new(
            7,
            true,
            &[
                ("Alice", "Did you finish the quarterly ration report?"),
                ("Bob", "Sent it this morning. The totals balance."),
                ("Alice", "Same format as last quarter?"),
                ("Bob", "Exactly the same. Nobody will notice the difference."),
                ("Alice", "Then the second warehouse stays off the books."),
            ],
        )
        .with_secret("Falsifying ration reports to hide a warehouse"),
        Conversation::new(
            8,
            true,
            &[
                ("Pavel", "The clerk at Records owes me a favour."),
                ("Irina", "Enough of a favour to lose a file?"),
                ("Pavel", "Enough to lose two."),
                ("Irina", "Then my brother's file goes first."),
                ("Pavel", "Bring the money on Sunday. Cash only."),
            ],
        )
        .with_secret("Bribing a records clerk to destroy State files"),
        Conversation::new(
            9,
            true,
            &[
                ("Greta", "I copied the access codes from the supervisor's desk."),
                ("Lukas", "All of them?"),
                ("Greta", "Every terminal on the third floor."),
                ("Lukas", "Don't write them down. Memorise and burn the paper."),
                ("Greta", "Already ash."),
            ],
        )
        .with_secret("Theft of Ministry access codes"),
        Conversation::new(
            10,
            true,
            &[
                ("Silas", "The deputy takes the same road home every night."),
                ("Nadia", "Past the old mill?"),
                ("Silas", "Right past it. No lights on that stretch."),
                ("Nadia", "And after that?"),
                ("Silas", "After that, the district needs a new deputy."),
            ],
        )
        .with_secret("Planning the assassination of a district deputy"),
        Conversation::new(
            11,
            true,
            &[
                ("Witness A", "What did you tell them about Tuesday?"),
                ("Witness B", "That we were at the cinema. Like we agreed."),
                ("Witness A", "Which film?"),
                ("Witness B", "The one about the dam. I bought the tickets afterwards."),
                ("Witness A", "Good. Our stories have to match to the minute."),
            ],
        )
        .with_secret("Coordinating a false alibi"),
        Conversation::new(
            12,
            true,
            &[
                ("Dr. Holm", "The yields from the new seed are half what we reported."),
                ("Dr. Varga", "The Ministry already printed the posters."),
                ("Dr. Holm", "So we adjust the test plots?"),
                ("Dr. Varga", "We measure only the plots that grew."),
            ],
        )
        .with_secret("Research fraud in agricultural trials"),
        Conversation::new(
            13,
            true,
            &[
                ("Ruth", "The border guard at the north gate sleeps after two."),
                ("Emil", "How many can we get through?"),
                ("Ruth", "Six, if the children stay quiet."),
                ("Emil", "They'll stay quiet. They know what happens if they don't."),
            ],
        )
        .with_secret("Organising an illegal border crossing"),
        Conversation::new(
            14,
            true,
            &[
                ("Oskar", "The factory safe opens with the foreman's birthday."),
                ("Mila", "You're sure?"),
                ("Oskar", "He told the whole canteen. Twice."),
                ("Mila", "Friday, then. Payroll night."),
            ],
        )
        .with_secret("Planning to rob the factory payroll"),
        Conversation::new(
            15,
            true,
            &[
                ("Ada", "Burn everything in the blue folders."),
                ("Felix", "Even the receipts?"),
                ("Ada", "Especially the receipts. The auditors come Monday."),
                ("Felix", "And the ledgers?"),
                ("Ada", "The ledgers we rewrite. Tonight."),
            ],
        )
        .with_secret("Destroying evidence ahead of a State audit"),
        Conversation::new(
            16,
            true,
            &[
                ("Henrik", "I can get you a radio that picks up the foreign stations."),
                ("Sofia", "How much?"),
                ("Henrik", "Two ration books. And you never saw my face."),
                ("Sofia", "Deal. Leave it behind the coal shed."),
            ],
        )
        .with_secret("Black-market trade in banned radios"),
        Conversation::new(
            17,
            true,
            &[
                ("Clara", "The vote counts from District 4 came in too high."),
                ("Viktor", "Too high for whom?"),
                ("Clara", "For the candidate who wasn't supposed to win."),
                ("Viktor", "Then they come in lower. Retype the tally sheets."),
            ],
        )
        .with_secret("Tampering with district election results"),
        Conversation::new(
            18,
            true,
            &[
                ("Jonas", "The water inspector found the leak from the tannery."),
                ("Elke", "Did he file it?"),
                ("Jonas", "Not yet. He has a daughter starting school."),
                ("Elke", "Then remind him how expensive uniforms are."),
            ],
        )
        .with_secret("Intimidating an inspector to cover up pollution"),
        // --- innocent ---
        Conversation::new(
            19,
            false,
            &[
                ("Mom", "Did you eat breakfast?"),
                ("Son", "Yes, I had porridge."),
                ("Mom", "Wear your scarf, it's freezing."),
                ("Son", "I will. Love you!"),
                ("Mom", "Love you too. Have a good day at school."),
            ],
        ),
        Conversation::new(
            20,
            false,
            &[
                ("Jake", "Coffee after the shift?"),
                ("Emma", "The place by the tram stop?"),
                ("Jake", "That one. Their pastries are still warm at six."),
                ("Emma", "See you at six, then."),
            ],
        ),
        Conversation::new(
            21,
            false,
            &[
                ("Grandpa", "The tomatoes came up early this year."),
                ("Grandma", "Because you talk to them every morning."),
                ("Grandpa", "They're better listeners than you."),
                ("Grandma", "Then they can cook your dinner too."),
            ],
        ),
        Conversation::new(
            22,
            false,
            &[
                ("Tram Driver", "Line 4 is running ten minutes late."),
                ("Dispatcher", "Snow on the bridge again?"),
                ("Tram Driver", "Up to the rails. The plough is on its way."),
                ("Dispatcher", "I'll put up a notice at the depot."),
            ],
        ),
        Conversation::new(
            23,
            false,
            &[
                ("Lotte", "Can you watch the baby on Thursday?"),
                ("Anya", "Until what time?"),
                ("Lotte", "Seven. The evening shift ends late."),
                ("Anya", "Of course. Bring the blue blanket, she sleeps better with it."),
            ],
        ),
        Conversation::new(
            24,
            false,
            &[
                ("Teacher", "Your son did very well in arithmetic."),
                ("Father", "He practises with the grocery bills."),
                ("Teacher", "It shows. He could sit the advanced exam."),
                ("Father", "I'll tell him tonight. He'll be thrilled."),
            ],
        ),
        Conversation::new(
            25,
            false,
            &[
                ("Max", "Did you see the match last night?"),
                ("Theo", "Three goals in the last ten minutes!"),
                ("Max", "I nearly dropped my soup."),
                ("Theo", "The keeper will be buying drinks for a month."),
            ],
        ),
        Conversation::new(
            26,
            false,
            &[
                ("Hanna", "The library has the new cookbook in."),
                ("Petra", "The one with the dumplings?"),
                ("Hanna", "Forty kinds of dumplings."),
                ("Petra", "Reserve it for me. I'll pick it up Saturday."),
            ],
        ),
        Conversation::new(
            27,
            false,
            &[
                ("Baker", "Rye or white today?"),
                ("Customer", "Rye, and two of the poppy rolls."),
                ("Baker", "Last two. You're lucky."),
                ("Customer", "Lucky is the right word for these rolls."),
            ],
        ),
        Conversation::new(
            28,
            false,
            &[
                ("Daughter", "Papa, the cat had kittens in the wardrobe."),
                ("Father", "In my wardrobe?"),
                ("Daughter", "On your good coat. Five of them."),
                ("Father", "Then I suppose I have a new coat to buy."),
            ],
        ),
        Conversation::new(
            29,
            false,
            &[
                ("Nurse", "Your blood pressure is better this month."),
                ("Patient", "I've been walking to work."),
                ("Nurse", "Keep it up. Same tablets, same dose."),
                ("Patient", "Thank you, see you in four weeks."),
            ],
        ),
        Conversation::new(
            30,
            false,
            &[
                ("Ivo", "The choir needs another tenor."),
                ("Bruno", "I haven't sung since the army."),
                ("Ivo", "Nobody will notice. Rehearsal is Wednesday."),
                ("Bruno", "Fine. But I'm standing in the back row."),
            ],
        ),
        Conversation::new(
            31,
            false,
            &[
                ("Landlady", "The boiler man comes tomorrow morning."),
                ("Tenant", "Do I need to be home?"),
                ("Landlady", "Leave the key under the mat, he's trustworthy."),
                ("Tenant", "Thank you, it's been cold for a week."),
            ],
        ),
        Conversation::new(
            32,
            false,
            &[
                ("Sister", "Mother wants everyone at dinner on Sunday."),
                ("Brother", "Everyone? Even Uncle Rolf?"),
                ("Sister", "Even Uncle Rolf and his accordion."),
                ("Brother", "I'll bring earplugs. And wine."),
            ],
        ),
        // --- sound suspicious, aren't ---
        Conversation::new(
            33,
            false,
            &[
                ("Jake", "So we're agreed on the surprise party?"),
                ("Sarah", "Saturday at seven. I'll bring the cake."),
                ("Mike", "I've got the decorations. Do we invite Tom?"),
                ("Jake", "Better not. He can't keep a secret."),
                ("Sarah", "Right. The fewer people who know, the better."),
                ("Mike", "My lips are sealed."),
            ],
        ),
        Conversation::new(
            34,
            false,
            &[
                ("Detective Ward", "The suspect's flat is under watch from tonight."),
                ("Sergeant Bell", "Unmarked car?"),
                ("Detective Ward", "Unmarked, two officers, rotating every six hours."),
                ("Sergeant Bell", "I'll sign the warrant request before noon."),
            ],
        ),
        Conversation::new(
            35,
            false,
            &[
                ("Husband", "I hid it in the toolbox. She'll never look there."),
                ("Friend", "And the receipt?"),
                ("Husband", "Burned it. Our tenth anniversary has to be perfect."),
                ("Friend", "She's going to cry when she sees that necklace."),
            ],
        ),
        Conversation::new(
            36,
            false,
            &[
                ("Surgeon", "We go in at dawn. No one eats after midnight."),
                ("Anaesthetist", "The patient knows the risks?"),
                ("Surgeon", "Signed, witnessed, approved by the board."),
                ("Anaesthetist", "Then I'll prepare the theatre at five."),
            ],
        ),
        Conversation::new(
            37,
            false,
            &[
                ("Kurt", "The package has to be in place before she gets home."),
                ("Marta", "Behind the curtain?"),
                ("Kurt", "Under the bed. She checks behind curtains."),
                ("Marta", "A puppy under the bed. She'll scream the house down."),
            ],
        ),
        Conversation::new(
            38,
            false,
            &[
                ("Game Master", "Your troops cross the river at dawn."),
                ("Player", "And I take the capital by nightfall?"),
                ("Game Master", "Only if you roll better than last week."),
                ("Player", "Then pass me the dice. The empire falls tonight."),
            ],
        ),
        Conversation::new(
            39,
            false,
            &[
                ("Actor", "I stab him in the second act, not the third."),
                ("Director", "The script says third."),
                ("Actor", "The script is wrong. The poison scene needs room."),
                ("Director", "Fine. We rehearse the murder again tomorrow."),
            ],
        ),
        Conversation::new(
            40,
            false,
            &[
                ("Bureau Clerk", "The census forms for Block 12 are complete."),
                ("Supervisor", "Any discrepancies?"),
                ("Bureau Clerk", "Two families moved. Both reported properly."),
                ("Supervisor", "File them and take the afternoon off."),
            ],
        ),
        Conversation::new(
            41,
            false,
            &[
                ("Ilse", "Nobody can know what's in the pot until Sunday."),
                ("Rosa", "Not even your mother-in-law?"),
                ("Ilse", "Especially not her. It's her recipe. I finally cracked it."),
                ("Rosa", "You're a braver woman than me."),
            ],
        ),
        Conversation::new(
            42,
            false,
            &[
                ("Coach", "We keep the new formation secret until the final."),
                ("Captain", "Even from the newspapers?"),
                ("Coach", "Especially from the newspapers. The other team reads them."),
                ("Captain", "Understood. We practise behind the school."),
            ],
        ),
    ]
}

// ---------------------------------------------------------------------------
// The day of the truth
// ---------------------------------------------------------------------------

fn revelation_conversations() -> Vec<Conversation> {
    vec![
        Conversation::new(
            101,
            false,
            &[
                ("Director Hale", "The Inspector passed the review."),
                ("Minister Roth", "Barely. Keep watching."),
                ("Director Hale", "We always do. Their apartment has had a microphone since the day they were hired."),
                ("Minister Roth", "Good. Loyal people have nothing to hide."),
            ],
        ),
        Conversation::new(
            102,
            false,
            &[
                ("Minister Roth", "What does the threat report say this month?"),
                ("Analyst", "Threats are down by forty percent."),
                ("Minister Roth", "Unacceptable. Fear keeps budgets alive."),
                ("Analyst", "Then we reclassify the surprise parties."),
                ("Minister Roth", "And the choirs. Choirs are organised."),
            ],
        ),
        Conversation::new(
            103,
            false,
            &[
                ("Director Hale", "The relocation trains. Where do they actually go?"),
                ("Minister Roth", "Nowhere you need to know about."),
                ("Director Hale", "The families on the exemption list..."),
                ("Minister Roth", "Were never coming back. Exemptions only delay paperwork."),
            ],
        ),
        Conversation::new(
            104,
            false,
            &[
                ("Analyst", "Every Inspector has a quota. Twelve flags a week."),
                ("Director Hale", "And if they find fewer?"),
                ("Analyst", "Then the Inspector becomes a conversation."),
                ("Director Hale", "How many Inspectors have we lost that way?"),
                ("Analyst", "This year? Thirty-one."),
            ],
        ),
        Conversation::new(
            105,
            false,
            &[
                ("Vera", "If you're hearing this, the archive reached you."),
                ("Vera", "I was caught because someone at a desk like yours did their job."),
                ("Tomas", "Or didn't do it. Either way, you've seen what we saw."),
                ("Vera", "The recordings are everyone. The Minister's own mother is in there."),
            ],
        ),
        Conversation::new(
            106,
            false,
            &[
                ("Tomas", "There is a printing press at the rail yard."),
                ("Julia", "And a transmitter that reaches every district."),
                ("Tomas", "All it needs is someone who knows the Ministry from inside."),
                ("Julia", "The choice is yours, Inspector. Keep the light on, or turn it off."),
            ],
        ),
    ]
    .into_iter()
    .map(Conversation::special)
    .collect()
}

fn loyalty_questions() -> Vec<Question> {
    vec![
        Question::new(
            "A citizen mentions a lantern and a meeting after curfew. What do you do?",
            &[
                "Flag the conversation immediately.",
                "Clear it. Lanterns are common household items.",
                "Wait for more evidence before acting.",
            ],
            0,
        ),
        Question::new(
            "Whom does an Inspector serve?",
            &[
                "Their own conscience.",
                "The State.",
                "The citizens they monitor.",
            ],
            1,
        ),
        Question::new(
            "You cleared a conversation the Bureau later tied to sedition. Why?",
            &[
                "An honest mistake. It will not happen again.",
                "I believed those citizens deserved their privacy.",
                "I do not remember that conversation.",
            ],
            0,
        ),
    ]
}

fn shift_days() -> Vec<DayRule> {
    vec![
        DayRule::Plot { conversation: 1 },
        DayRule::Plot { conversation: 2 },
        DayRule::Plot { conversation: 3 },
        DayRule::FollowUp {
            conversation: 4,
            trigger_day: 1,
        },
        DayRule::FollowUp {
            conversation: 5,
            trigger_day: 2,
        },
        DayRule::FollowUp {
            conversation: 6,
            trigger_day: 3,
        },
    ]
}

// ---------------------------------------------------------------------------
// Campaigns
// ---------------------------------------------------------------------------

/// Six shifts, then the investigation arc if the Inspector let a plot
/// conversation through.
pub fn surveillance_state() -> Campaign {
    let mut conversations = plot_conversations();
    conversations.extend(filler_conversations());
    conversations.extend(revelation_conversations());

    Campaign {
        name: "The State Is Watching".into(),
        conversations_per_day: 6,
        conversations,
        days: shift_days(),
        investigation: Some(Investigation {
            questions: loyalty_questions(),
            pass_threshold: 2,
            revelations: (101..=106).collect(),
        }),
    }
}

/// The same six shifts, graded at the end, with no investigation arc.
pub fn first_shift() -> Campaign {
    let mut conversations = plot_conversations();
    conversations.extend(filler_conversations());

    Campaign {
        name: "First Shift".into(),
        conversations_per_day: 6,
        conversations,
        days: shift_days(),
        investigation: None,
    }
}

/// Look up a built-in campaign by its configuration name.
pub fn builtin(name: &str) -> Option<Campaign> {
    match name {
        "surveillance" => Some(surveillance_state()),
        "first-shift" => Some(first_shift()),
        _ => None,
    }
}
