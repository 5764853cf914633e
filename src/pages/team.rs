use leptos::prelude::*;

struct TeamMember {
    name: &'static str,
    index: &'static str,
    role: &'static str,
}

const TEAM_MEMBERS: &[TeamMember] = &[
    TeamMember { name: "I.S. Siriwardana", index: "22UG1-0522", role: "Model Developer" },
    TeamMember { name: "J.S. Dharmadasa", index: "22UG1-0557", role: "Model Developer" },
    TeamMember { name: "S.P.A.S. Senarathne", index: "22UG1-0345", role: "Backend Developer & Deployment" },
    TeamMember { name: "H.A.K. De Zoysa", index: "22UG1-0496", role: "Frontend Developer" },
    TeamMember { name: "K.G.V.T. Gamage", index: "22UG1-0392", role: "Backend Developer & Deployment" },
    TeamMember { name: "H.M.K.S. Dedunupitiya", index: "22UG1-0812", role: "Frontend Developer" },
    TeamMember { name: "B.K.G. Perera", index: "22UG1-0506", role: "Data Collection & Preprocessing" },
    TeamMember { name: "G.K.S. Fernando", index: "22UG1-0379", role: "Data Collection & Preprocessing" },
    TeamMember { name: "G.K.S. Pathum", index: "22UG1-0520", role: "Data Collection & Preprocessing" },
    TeamMember { name: "S. Yugadharshini", index: "22UG1-0289", role: "Model Developer" },
    TeamMember { name: "U.V.C.T. Jayathilaka", index: "22UG1-0380", role: "Backend Developer & Deployment" },
];

/// Initials for the avatar fallback: first letters of up to two name parts.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect()
}

#[component]
pub fn TeamPage() -> impl IntoView {
    view! {
        <div class="page team-page">
            <h2>"Meet Our Team"</h2>
            <p class="page-description">
                "This mini project for CCS4310 Deep Learning was developed by DL Squad, a team of passionate undergraduate students exploring the power of deep learning through real-world applications."
            </p>

            <div class="card-grid team-grid">
                {TEAM_MEMBERS
                    .iter()
                    .map(|member| view! {
                        <div class="card team-card">
                            <div class="avatar">{initials(member.name)}</div>
                            <h4>{member.name}</h4>
                            <p class="member-index">{member.index}</p>
                            <span class="role-badge">{member.role}</span>
                        </div>
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="card mission">
                <h3>"Our Mission"</h3>
                <p>
                    "At DL Squad, we believe the future of dental healthcare lies at the intersection of clinical expertise and cutting-edge AI. Our mini project reflects this vision: bringing accessible, interpretable, and impactful diagnostics through deep learning. With a focus on open collaboration and ethical development, we aim to make a difference in both research and real-world impact."
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_takes_first_two_parts() {
        assert_eq!(initials("I.S. Siriwardana"), "IS");
        assert_eq!(initials("S. Yugadharshini"), "SY");
        assert_eq!(initials("Solo"), "S");
    }
}
