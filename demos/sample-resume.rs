use resume_gen::{Activity, Project, ResumeRecord};

fn main() {
    env_logger::init();

    let record = ResumeRecord {
        name: "John Doe".to_string(),
        email: "john.doe@example.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        university: "XYZ University".to_string(),
        degree: "B.Sc. Computer Science, 2nd Year".to_string(),
        grad_year: "Expected 2026".to_string(),
        summary: "Enthusiastic and dedicated 2nd-year Computer Science student with a passion \
                  for software development and problem-solving. Seeking to leverage classroom \
                  knowledge in a practical environment to gain experience in coding, \
                  algorithms, and data structures."
            .to_string(),
        skills: vec![
            "Python".to_string(),
            "Java".to_string(),
            "Data Structures".to_string(),
            "Git/GitHub".to_string(),
            "HTML/CSS".to_string(),
            "Team Collaboration".to_string(),
        ],
        projects: vec![
            Project {
                title: "Student Portfolio Website".to_string(),
                description: "Developed a personal portfolio website using HTML, CSS, and a \
                              bit of JavaScript. Showcases academic projects, coding samples, \
                              and extracurricular achievements."
                    .to_string(),
            },
            Project {
                title: "Basic Chat Application".to_string(),
                description: "Created a command-line chat application in Python using \
                              sockets. Learned about client-server architecture and basic \
                              networking principles."
                    .to_string(),
            },
        ],
        activities: vec![
            Activity {
                name: "Computer Science Club".to_string(),
                role: "Member".to_string(),
                description: "Participated in weekly coding challenges and hackathons. \
                              Collaborated with peers to learn new programming techniques."
                    .to_string(),
            },
            Activity {
                name: "Robotics Team".to_string(),
                role: "Volunteer".to_string(),
                description: "Helped design and test small-scale robots for inter-college \
                              competitions, focusing on sensor integration and mechanical \
                              design aspects."
                    .to_string(),
            },
        ],
        awards: vec![
            "Dean's List (2023)".to_string(),
            "1st place in University Programming Contest".to_string(),
        ],
    };

    for template in ["traditional", "modern", "creative", "executive"] {
        let bytes = resume_gen::render_resume(&record, template).expect("render succeeds");
        let filename = format!("john-doe-{template}.pdf");
        std::fs::write(&filename, bytes).expect("can write output");
        println!("wrote {filename}");
    }
}
